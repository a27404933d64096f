use mlpnet_core::MlpError;
use thiserror::Error;

/// Errors raised while loading, splitting or encoding samples.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("Unknown label: {0:?}")]
    UnknownLabel(String),

    #[error("Invalid train fraction {0}: must lie strictly between 0 and 1")]
    InvalidSplit(f64),

    #[error("Index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Core(#[from] MlpError),
}
