//! Schedule domain model.
//!
//! A schedule document describes one conference day: a date plus an ordered
//! list of timeslots, each referencing the sessions running in that slot by
//! key. Field names follow the original document shape (camelCase).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One day of the conference agenda, as stored in the raw `schedule`
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Calendar date of this agenda day, used for descending fetch order
    pub date: NaiveDate,
    /// Timeslots in agenda order
    #[serde(default)]
    pub timeslots: Vec<Timeslot>,
    /// Presentation attributes opaque to the mapper (dateReadable, track
    /// names, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A block of time within a schedule day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
    pub start_time: String,
    pub end_time: String,
    /// Keys of the sessions running in this slot
    #[serde(default)]
    pub sessions: Vec<String>,
}

impl Timeslot {
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        sessions: Vec<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            sessions,
        }
    }
}
