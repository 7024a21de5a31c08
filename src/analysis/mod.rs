mod config;
mod runner;
mod tau_sweep;

pub use config::{AnalysisConfig, config_schema};
pub use runner::analyze;
pub use tau_sweep::TauSweep;
