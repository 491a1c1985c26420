//! In-memory sink for testing.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{PersistencePort, SinkError};

/// In-memory implementation of `PersistencePort`.
///
/// Suitable for testing and development.
#[derive(Debug, Default)]
pub struct InMemorySink {
    documents: RwLock<HashMap<String, Value>>,
}

impl InMemorySink {
    /// Create a new empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last document saved under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PersistencePort for InMemorySink {
    async fn save(&self, name: &str, document: &Value) -> Result<(), SinkError> {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), document.clone());
        Ok(())
    }
}
