use thiserror::Error;

/// Custom error type for the mlpnet engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MlpError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
        operation: String,
    },

    #[error("Incompatible shapes for operation: {shape1:?} and {shape2:?}")]
    IncompatibleShapes {
        shape1: (usize, usize),
        shape2: (usize, usize),
    },

    #[error("Matrix creation error: data length {data_len} does not match shape {shape:?}")]
    MatrixCreationError { data_len: usize, shape: (usize, usize) },

    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Raised when an activation is requested by a name no kind answers to.
    #[error("Unknown activation kind: {0}")]
    UnknownActivation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Network has not been built; call build() first")]
    UnbuiltNetwork,

    #[error("Unsupported export format: {0:?}")]
    UnsupportedExportFormat(String),

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MlpError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        MlpError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MlpError {
    fn from(err: serde_json::Error) -> Self {
        MlpError::Serialization(err.to_string())
    }
}
