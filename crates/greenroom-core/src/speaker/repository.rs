//! Speaker repository trait.

use super::model::Speaker;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Read side of the raw `speakers` collection.
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// Loads every speaker document, keyed by its collection key.
    ///
    /// # Returns
    ///
    /// - `Ok(BTreeMap)`: All stored speakers (possibly empty)
    /// - `Err(_)`: Error occurred during retrieval
    async fn list_all(&self) -> Result<BTreeMap<String, Speaker>>;
}
