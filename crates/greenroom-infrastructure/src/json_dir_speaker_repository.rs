//! JSON directory-backed SpeakerRepository implementation.

use crate::paths::GreenroomPaths;
use crate::storage::JsonDirStorage;
use anyhow::Result;
use async_trait::async_trait;
use greenroom_core::speaker::{Speaker, SpeakerRepository};
use std::collections::BTreeMap;
use std::path::Path;

/// Speakers collection stored as `speakers/{key}.json`.
pub struct JsonDirSpeakerRepository {
    storage: JsonDirStorage,
}

impl JsonDirSpeakerRepository {
    /// Opens the speakers collection under the given data directory.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let storage = JsonDirStorage::open(data_dir.as_ref().join("speakers")).await?;
        Ok(Self { storage })
    }

    /// Opens the speakers collection at the default platform data location.
    pub async fn default_location() -> Result<Self> {
        let data_dir = GreenroomPaths::data_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get data directory: {}", e))?;
        Self::new(data_dir).await
    }

    /// Writes a speaker document. Used by seeding and external tooling.
    pub async fn save(&self, key: &str, speaker: &Speaker) -> Result<()> {
        self.storage.save(key, speaker).await
    }

    /// Deletes a speaker document.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.storage.delete(key).await
    }
}

#[async_trait]
impl SpeakerRepository for JsonDirSpeakerRepository {
    async fn list_all(&self) -> Result<BTreeMap<String, Speaker>> {
        self.storage.load_all().await
    }
}
