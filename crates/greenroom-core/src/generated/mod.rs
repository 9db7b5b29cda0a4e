//! Generated-view domain module.
//!
//! - `model`: Enriched (denormalized) record types and the per-run
//!   `GeneratedViews` variant
//! - `repository`: Batch-write trait for the generated output collections

mod model;
mod repository;

pub use model::{
    EnrichedScheduleEntry, EnrichedSession, EnrichedSpeaker, EnrichedTimeslot, GeneratedViews,
    SessionRef, SpeakerSummary,
};
pub use repository::GeneratedViewRepository;
