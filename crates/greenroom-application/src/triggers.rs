//! Trigger routing.
//!
//! Maps collection-write events onto the use cases, mirroring the hosted
//! trigger surface: one entry point per watched collection plus the
//! account-creation hook. The hosting environment (or the CLI) is expected
//! to call these; there is no other API.

use crate::generate_usecase::GenerateViewsUseCase;
use crate::provision_usecase::ProvisionUserUseCase;
use anyhow::Result;
use greenroom_core::generated::GeneratedViews;
use greenroom_core::speaker::{ChangedSpeaker, Speaker};
use greenroom_core::user::{IdentityRecord, UserProfile};
use std::sync::Arc;

/// Routes write events on the watched collections to the use cases.
pub struct TriggerRouter {
    generate: Arc<GenerateViewsUseCase>,
    provision: Arc<ProvisionUserUseCase>,
}

impl TriggerRouter {
    pub fn new(generate: Arc<GenerateViewsUseCase>, provision: Arc<ProvisionUserUseCase>) -> Self {
        Self {
            generate,
            provision,
        }
    }

    /// Any create/update/delete in the sessions collection.
    pub async fn on_sessions_write(&self) -> Result<GeneratedViews> {
        self.generate.regenerate(None).await
    }

    /// Any create/update/delete in the schedule collection.
    ///
    /// Regenerates only when the schedule flag is explicitly "true". An
    /// unset flag is a configuration error; any other value is a quiet
    /// no-op (`Ok(None)`).
    pub async fn on_schedule_write(&self) -> Result<Option<GeneratedViews>> {
        match self.generate.schedule_enabled() {
            Err(e) => {
                tracing::error!("{e}");
                Err(e.into())
            }
            Ok(false) => Ok(None),
            Ok(true) => Ok(Some(self.generate.regenerate(None).await?)),
        }
    }

    /// Any create/update/delete in the speakers collection.
    ///
    /// `after` is the document state after the write; deletions pass `None`
    /// and run without a changed-speaker merge.
    pub async fn on_speakers_write(
        &self,
        speaker_id: &str,
        after: Option<Speaker>,
    ) -> Result<GeneratedViews> {
        let changed = after.map(|record| ChangedSpeaker::new(speaker_id, record));
        self.generate.regenerate(changed).await
    }

    /// Account creation reported by the identity provider.
    pub async fn on_user_created(&self, record: &IdentityRecord) -> Result<UserProfile> {
        self.provision.on_user_created(record).await
    }
}
