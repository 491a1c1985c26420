//! JSON file sink.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use super::error::PersistenceError;
use crate::application::ports::{PersistencePort, SinkError};

/// Writes each document as pretty-printed JSON to `<dir>/<name>`.
///
/// The directory is created on first write. Existing files are replaced.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    /// Create a sink rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path a document named `name` is written to.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    async fn write(&self, name: &str, document: &Value) -> Result<PathBuf, PersistenceError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| PersistenceError::Io {
                path: self.dir.display().to_string(),
                source,
            })?;

        let bytes =
            serde_json::to_vec_pretty(document).map_err(|source| PersistenceError::Serialization {
                name: name.to_string(),
                source,
            })?;

        let path = self.path_for(name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| PersistenceError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Ok(path)
    }
}

#[async_trait]
impl PersistencePort for JsonFileSink {
    async fn save(&self, name: &str, document: &Value) -> Result<(), SinkError> {
        let path = self.write(name, document).await?;
        tracing::info!(path = %path.display(), "Data saved");
        Ok(())
    }
}
