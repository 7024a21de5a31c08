mod conversion;
mod dataset;
mod error;
mod statistic;

pub use conversion::{freq_to_phase, phase_to_freq};
pub use dataset::{Dataset, DatasetIds};
pub use error::StabilityError;
pub use statistic::{SampleKind, Statistic};
