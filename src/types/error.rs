//! Error type shared by the loader and the graph pipeline

use thiserror::Error;

/// Errors raised while loading a dataset or transforming tables
#[derive(Error, Debug)]
pub enum MedialError {
    /// A required field or column is missing from an input table
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MedialError {
    pub fn schema(message: impl Into<String>) -> Self {
        MedialError::Schema(message.into())
    }

    /// Check if this error is a schema violation
    pub fn is_schema(&self) -> bool {
        matches!(self, MedialError::Schema(_))
    }
}

/// Result type for dataset and pipeline operations
pub type MedialResult<T> = Result<T, MedialError>;
