//! Schedule repository trait.

use super::model::ScheduleEntry;
use anyhow::Result;
use async_trait::async_trait;

/// Read side of the raw `schedule` collection.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Loads every schedule day, ordered by date descending.
    ///
    /// The descending order is part of the contract: the agenda view is
    /// built most-recent-day-first, so ordering happens at fetch time rather
    /// than in the mapper.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec)`: All schedule days with their collection keys, newest
    ///   date first (possibly empty)
    /// - `Err(_)`: Error occurred during retrieval
    async fn list_by_date_desc(&self) -> Result<Vec<(String, ScheduleEntry)>>;
}
