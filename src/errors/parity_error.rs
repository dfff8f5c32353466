//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while encoding, building datasets, training or configuring.
#[derive(Debug, Error)]
pub enum ParityError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Value {value} does not fit in {width} bits")]
    Overflow { value: i64, width: usize },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ParityError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ParityError::InvalidArgument { message: message.into() }
    }
}
