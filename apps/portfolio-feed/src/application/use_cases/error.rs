//! Refresh use case errors.

use crate::application::ports::{BenchmarkDataError, SinkError};

/// Failure of a refresh cycle.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshError {
    /// Benchmark provider failed.
    #[error(transparent)]
    BenchmarkData(#[from] BenchmarkDataError),

    /// Document could not be persisted.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// Document could not be converted to JSON.
    #[error("Failed to encode document: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for RefreshError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
