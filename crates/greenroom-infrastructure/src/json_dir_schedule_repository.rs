//! JSON directory-backed ScheduleRepository implementation.

use crate::paths::GreenroomPaths;
use crate::storage::JsonDirStorage;
use anyhow::Result;
use async_trait::async_trait;
use greenroom_core::schedule::{ScheduleEntry, ScheduleRepository};
use std::cmp::Reverse;
use std::path::Path;

/// Schedule collection stored as `schedule/{key}.json`.
pub struct JsonDirScheduleRepository {
    storage: JsonDirStorage,
}

impl JsonDirScheduleRepository {
    /// Opens the schedule collection under the given data directory.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let storage = JsonDirStorage::open(data_dir.as_ref().join("schedule")).await?;
        Ok(Self { storage })
    }

    /// Opens the schedule collection at the default platform data location.
    pub async fn default_location() -> Result<Self> {
        let data_dir = GreenroomPaths::data_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get data directory: {}", e))?;
        Self::new(data_dir).await
    }

    /// Writes a schedule day document. Used by seeding and external tooling.
    pub async fn save(&self, key: &str, entry: &ScheduleEntry) -> Result<()> {
        self.storage.save(key, entry).await
    }

    /// Deletes a schedule day document.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.storage.delete(key).await
    }
}

#[async_trait]
impl ScheduleRepository for JsonDirScheduleRepository {
    async fn list_by_date_desc(&self) -> Result<Vec<(String, ScheduleEntry)>> {
        let all = self.storage.load_all::<ScheduleEntry>().await?;

        let mut days: Vec<(String, ScheduleEntry)> = all.into_iter().collect();
        // Newest day first; key order breaks date ties so repeated runs see
        // the same sequence.
        days.sort_by(|(key_a, a), (key_b, b)| {
            (Reverse(a.date), key_a).cmp(&(Reverse(b.date), key_b))
        });
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::Map;

    fn day(date: (i32, u32, u32)) -> ScheduleEntry {
        ScheduleEntry {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            timeslots: vec![],
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_date_descending() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let repository = JsonDirScheduleRepository::new(temp_dir.path())
            .await
            .unwrap();

        repository.save("day1", &day((2026, 9, 18))).await.unwrap();
        repository.save("day2", &day((2026, 9, 19))).await.unwrap();
        repository.save("day3", &day((2026, 9, 17))).await.unwrap();

        let days = repository.list_by_date_desc().await.unwrap();

        let keys: Vec<&str> = days.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["day2", "day1", "day3"]);
    }

    #[tokio::test]
    async fn test_empty_schedule_lists_empty() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let repository = JsonDirScheduleRepository::new(temp_dir.path())
            .await
            .unwrap();

        assert!(repository.list_by_date_desc().await.unwrap().is_empty());
    }
}
