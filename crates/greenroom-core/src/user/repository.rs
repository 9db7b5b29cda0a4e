//! User repository trait.

use super::model::UserProfile;
use anyhow::Result;
use async_trait::async_trait;

/// Persistence for provisioned user profiles, keyed by user identifier.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores the profile under the given user identifier, replacing any
    /// existing document.
    async fn save(&self, uid: &str, profile: &UserProfile) -> Result<()>;

    /// Loads a profile by user identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UserProfile))`: Profile found
    /// - `Ok(None)`: No profile stored for this identifier
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, uid: &str) -> Result<Option<UserProfile>>;
}
