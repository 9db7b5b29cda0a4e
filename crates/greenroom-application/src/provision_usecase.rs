//! User provisioning use case.

use anyhow::Result;
use greenroom_core::user::{IdentityRecord, UserProfile, UserRepository};
use greenroom_core::GreenroomError;
use std::sync::Arc;

/// Use case that provisions a user profile when the identity provider
/// reports an account creation.
///
/// Re-running with the same record produces the same stored document; the
/// write replaces by key.
pub struct ProvisionUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ProvisionUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Derives and stores the profile for a newly created account.
    ///
    /// Missing profile fields fall back through the first linked provider to
    /// empty strings and never fail the write. A record with no usable
    /// identifier anywhere is the one rejected case: a keyless document
    /// cannot be addressed.
    pub async fn on_user_created(&self, record: &IdentityRecord) -> Result<UserProfile> {
        let uid = record.user_id();
        if uid.is_empty() {
            return Err(GreenroomError::data_access(
                "Identity record carries no uid, neither primary nor via a linked provider",
            )
            .into());
        }

        let profile = record.derive_profile();
        self.user_repository.save(&uid, &profile).await?;
        tracing::debug!("Provisioned user profile for '{}'", uid);
        Ok(profile)
    }
}
