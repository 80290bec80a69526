//! Error types for fanout-io.

use thiserror::Error;

/// Result type for fanout-io operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors that can occur while reading a document or writing records.
#[derive(Debug, Error)]
pub enum IoError {
    /// The source could not be read or the destination could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The source was not parseable as a single JSON document.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
