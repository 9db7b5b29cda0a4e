//! JSON directory-backed SessionRepository implementation.

use crate::paths::GreenroomPaths;
use crate::storage::JsonDirStorage;
use anyhow::Result;
use async_trait::async_trait;
use greenroom_core::session::{Session, SessionRepository};
use std::collections::BTreeMap;
use std::path::Path;

/// Sessions collection stored as `sessions/{key}.json`.
pub struct JsonDirSessionRepository {
    storage: JsonDirStorage,
}

impl JsonDirSessionRepository {
    /// Opens the sessions collection under the given data directory.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let storage = JsonDirStorage::open(data_dir.as_ref().join("sessions")).await?;
        Ok(Self { storage })
    }

    /// Opens the sessions collection at the default platform data location.
    pub async fn default_location() -> Result<Self> {
        let data_dir = GreenroomPaths::data_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get data directory: {}", e))?;
        Self::new(data_dir).await
    }

    /// Writes a session document. Used by seeding and external tooling; the
    /// aggregation pipeline itself never writes the source collections.
    pub async fn save(&self, key: &str, session: &Session) -> Result<()> {
        self.storage.save(key, session).await
    }

    /// Deletes a session document.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.storage.delete(key).await
    }
}

#[async_trait]
impl SessionRepository for JsonDirSessionRepository {
    async fn list_all(&self) -> Result<BTreeMap<String, Session>> {
        self.storage.load_all().await
    }
}
