pub mod analysis;
pub mod core;
pub mod estimators;
pub mod loaders;
pub mod plot;
pub mod simulation;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::{Dataset, DatasetIds, SampleKind, StabilityError, Statistic};
