//! Error types for lanshare.

use thiserror::Error;

/// Common error type for lanshare.
#[derive(Error, Debug)]
pub enum ShareError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Upload exceeded the configured size limit.
    #[error("file too large: exceeds limit of {limit} bytes")]
    FileTooLarge {
        /// Limit in bytes.
        limit: u64,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for lanshare operations.
pub type Result<T> = std::result::Result<T, ShareError>;
