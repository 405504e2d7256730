//! Error types for Handover.

use thiserror::Error;

/// Main error type for Handover operations.
#[derive(Error, Debug)]
pub enum HandoverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Handover operations.
pub type Result<T> = std::result::Result<T, HandoverError>;
