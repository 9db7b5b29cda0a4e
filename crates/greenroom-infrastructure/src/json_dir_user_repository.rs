//! JSON directory-backed UserRepository implementation.

use crate::paths::GreenroomPaths;
use crate::storage::JsonDirStorage;
use anyhow::Result;
use async_trait::async_trait;
use greenroom_core::user::{UserProfile, UserRepository};
use std::path::Path;

/// Users collection stored as `users/{uid}.json`.
pub struct JsonDirUserRepository {
    storage: JsonDirStorage,
}

impl JsonDirUserRepository {
    /// Opens the users collection under the given data directory.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let storage = JsonDirStorage::open(data_dir.as_ref().join("users")).await?;
        Ok(Self { storage })
    }

    /// Opens the users collection at the default platform data location.
    pub async fn default_location() -> Result<Self> {
        let data_dir = GreenroomPaths::data_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get data directory: {}", e))?;
        Self::new(data_dir).await
    }
}

#[async_trait]
impl UserRepository for JsonDirUserRepository {
    async fn save(&self, uid: &str, profile: &UserProfile) -> Result<()> {
        self.storage.save(uid, profile).await
    }

    async fn find_by_id(&self, uid: &str) -> Result<Option<UserProfile>> {
        self.storage.load(uid).await
    }
}
