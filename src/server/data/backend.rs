//! Persistence backends for the poll store.
//!
//! The poll store serializes its whole table after every mutation through a
//! [`PollBackend`]. Production uses [`JsonFileBackend`]; tests can inject an
//! in-memory backend instead.

use serenity::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::server::{error::AppError, model::poll::PollDocument};

/// Durable storage for the poll document.
#[async_trait]
pub trait PollBackend: Send + Sync {
    /// Reads the persisted document.
    ///
    /// # Returns
    /// - `Ok(Some(PollDocument))` - Document was found and parsed
    /// - `Ok(None)` - Nothing persisted yet (fresh start)
    /// - `Err(AppError)` - Storage unreadable or document corrupt
    async fn load(&self) -> Result<Option<PollDocument>, AppError>;

    /// Replaces the persisted document. Returns only once the write is durable.
    async fn save(&self, document: &PollDocument) -> Result<(), AppError>;
}

/// Stores the poll document as pretty-printed JSON in a single file.
///
/// Writes go to a sibling temporary file which is then renamed over the target,
/// so a crash mid-write leaves the previous document intact.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

#[async_trait]
impl PollBackend for JsonFileBackend {
    async fn load(&self) -> Result<Option<PollDocument>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document = serde_json::from_slice(&bytes)?;
        Ok(Some(document))
    }

    async fn save(&self, document: &PollDocument) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(document)?;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        tracing::debug!(
            "Persisted {} poll(s) to {}",
            document.polls.len(),
            self.path.display()
        );

        Ok(())
    }
}
