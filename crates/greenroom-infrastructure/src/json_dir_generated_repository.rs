//! JSON directory-backed GeneratedViewRepository implementation.
//!
//! The three output collections mirror the source collections they derive
//! from:
//!
//! ```text
//! data_dir/
//! ├── generated_sessions/
//! ├── generated_speakers/
//! └── generated_schedule/
//! ```

use crate::paths::GreenroomPaths;
use crate::storage::JsonDirStorage;
use anyhow::Result;
use async_trait::async_trait;
use greenroom_core::generated::{
    EnrichedScheduleEntry, EnrichedSession, EnrichedSpeaker, GeneratedViewRepository,
};
use std::collections::BTreeMap;
use std::path::Path;

/// Generated output collections, one directory per view.
pub struct JsonDirGeneratedViewRepository {
    sessions: JsonDirStorage,
    speakers: JsonDirStorage,
    schedule: JsonDirStorage,
}

impl JsonDirGeneratedViewRepository {
    /// Opens the three output collections under the given data directory.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        Ok(Self {
            sessions: JsonDirStorage::open(data_dir.join("generated_sessions")).await?,
            speakers: JsonDirStorage::open(data_dir.join("generated_speakers")).await?,
            schedule: JsonDirStorage::open(data_dir.join("generated_schedule")).await?,
        })
    }

    /// Opens the output collections at the default platform data location.
    pub async fn default_location() -> Result<Self> {
        let data_dir = GreenroomPaths::data_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get data directory: {}", e))?;
        Self::new(data_dir).await
    }

    /// Reads back the generated sessions view.
    pub async fn load_sessions(&self) -> Result<BTreeMap<String, EnrichedSession>> {
        self.sessions.load_all().await
    }

    /// Reads back the generated speakers view.
    pub async fn load_speakers(&self) -> Result<BTreeMap<String, EnrichedSpeaker>> {
        self.speakers.load_all().await
    }

    /// Reads back the generated schedule view.
    pub async fn load_schedule(&self) -> Result<BTreeMap<String, EnrichedScheduleEntry>> {
        self.schedule.load_all().await
    }
}

#[async_trait]
impl GeneratedViewRepository for JsonDirGeneratedViewRepository {
    async fn save_sessions(&self, sessions: &BTreeMap<String, EnrichedSession>) -> Result<()> {
        self.sessions.save_all(sessions).await
    }

    async fn save_speakers(&self, speakers: &BTreeMap<String, EnrichedSpeaker>) -> Result<()> {
        self.speakers.save_all(speakers).await
    }

    async fn save_schedule(
        &self,
        schedule: &BTreeMap<String, EnrichedScheduleEntry>,
    ) -> Result<()> {
        self.schedule.save_all(schedule).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenroom_core::generated::SessionRef;
    use serde_json::Map;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_load_speakers_view() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirGeneratedViewRepository::new(temp_dir.path())
            .await
            .unwrap();

        let mut speakers = BTreeMap::new();
        speakers.insert(
            "p1".to_string(),
            EnrichedSpeaker {
                name: "Ada".to_string(),
                sessions: vec![SessionRef {
                    id: "s1".to_string(),
                    title: "Intro".to_string(),
                }],
                extra: Map::new(),
            },
        );

        repository.save_speakers(&speakers).await.unwrap();

        let loaded = repository.load_speakers().await.unwrap();
        assert_eq!(loaded, speakers);
    }

    #[tokio::test]
    async fn test_views_land_in_separate_collections() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonDirGeneratedViewRepository::new(temp_dir.path())
            .await
            .unwrap();

        let mut sessions = BTreeMap::new();
        sessions.insert(
            "s1".to_string(),
            EnrichedSession {
                id: "s1".to_string(),
                title: "Intro".to_string(),
                speakers: vec![],
                extra: Map::new(),
            },
        );
        repository.save_sessions(&sessions).await.unwrap();

        assert!(temp_dir
            .path()
            .join("generated_sessions")
            .join("s1.json")
            .exists());
        assert!(repository.load_speakers().await.unwrap().is_empty());
        assert!(repository.load_schedule().await.unwrap().is_empty());
    }
}
