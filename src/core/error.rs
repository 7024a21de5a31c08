use thiserror::Error;

#[derive(Debug, Error)]
pub enum StabilityError {
    #[error("dataset has no samples loaded")]
    EmptyDataset,

    #[error("invalid averaging factor: {0} (must be >= 1)")]
    InvalidAveragingFactor(usize),

    #[error("averaging factor {m} leaves no complete block in {len} samples")]
    AveragingFactorTooLarge { m: usize, len: usize },

    #[error("invalid tau0: {0} (must be finite and > 0)")]
    InvalidTau0(f64),

    #[error("unknown statistic: {0}")]
    UnknownStatistic(String),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
