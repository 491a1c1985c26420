//! Persistence adapter errors.

use thiserror::Error;

use crate::application::ports::SinkError;

/// Errors from the file-backed sink.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being written.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Document could not be serialized.
    #[error("Serialization error for {name}: {source}")]
    Serialization {
        /// Document name.
        name: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<PersistenceError> for SinkError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Io { path, source } => Self::Io {
                name: path,
                message: source.to_string(),
            },
            PersistenceError::Serialization { name, source } => Self::Encode {
                name,
                message: source.to_string(),
            },
        }
    }
}
