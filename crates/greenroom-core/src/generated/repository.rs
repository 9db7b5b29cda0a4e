//! Generated-view repository trait.

use super::model::{EnrichedScheduleEntry, EnrichedSession, EnrichedSpeaker};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Write side of the three generated output collections.
///
/// Each method replaces documents one-for-one by map key and completes as a
/// single batch: either every entry was written or the run fails with an
/// error. Documents not present in the map are left untouched; there is no
/// reconciliation pass that deletes orphaned output.
#[async_trait]
pub trait GeneratedViewRepository: Send + Sync {
    /// Writes every enriched session into the generated sessions collection.
    async fn save_sessions(&self, sessions: &BTreeMap<String, EnrichedSession>) -> Result<()>;

    /// Writes every enriched speaker into the generated speakers collection.
    async fn save_speakers(&self, speakers: &BTreeMap<String, EnrichedSpeaker>) -> Result<()>;

    /// Writes every enriched schedule day into the generated schedule
    /// collection.
    async fn save_schedule(&self, schedule: &BTreeMap<String, EnrichedScheduleEntry>)
        -> Result<()>;
}
