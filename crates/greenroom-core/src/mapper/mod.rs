//! Denormalizing mappers.
//!
//! Pure functions that join the raw collections into enriched views. The
//! speaker-only mapper handles runs where no usable schedule exists; the
//! schedule-aware mapper extends the same cross-linking with agenda
//! resolution. Neither touches storage.

mod sessions_speakers;
mod sessions_speakers_schedule;

pub use sessions_speakers::{map_sessions_speakers, SessionsSpeakersViews};
pub use sessions_speakers_schedule::{
    map_sessions_speakers_schedule, SessionsSpeakersScheduleViews,
};
