//! Persistence Port (Driven Port)
//!
//! Interface for writing refresh documents to durable storage.

use async_trait::async_trait;
use serde_json::Value;

/// Persistence error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    /// Storage I/O failed.
    #[error("Failed to write {name}: {message}")]
    Io {
        /// Document name.
        name: String,
        /// Error details.
        message: String,
    },

    /// Document could not be encoded.
    #[error("Failed to encode {name}: {message}")]
    Encode {
        /// Document name.
        name: String,
        /// Error details.
        message: String,
    },
}

/// Port for persisting documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistencePort: Send + Sync {
    /// Store `document` under `name`, replacing any previous version.
    async fn save(&self, name: &str, document: &Value) -> Result<(), SinkError>;
}
