//! Session repository trait.

use super::model::Session;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Read side of the raw `sessions` collection.
///
/// Sessions are created and edited by external tooling; the aggregation
/// pipeline only ever reads the collection in full.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads every session document, keyed by its collection key.
    ///
    /// # Returns
    ///
    /// - `Ok(BTreeMap)`: All stored sessions (possibly empty)
    /// - `Err(_)`: Error occurred during retrieval
    async fn list_all(&self) -> Result<BTreeMap<String, Session>>;
}
