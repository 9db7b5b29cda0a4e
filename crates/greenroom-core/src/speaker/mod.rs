//! Speaker domain module.
//!
//! - `model`: Raw speaker document (`Speaker`) and the changed-speaker
//!   trigger payload (`ChangedSpeaker`)
//! - `repository`: Read-side repository trait for the speakers collection

mod model;
mod repository;

pub use model::{ChangedSpeaker, Speaker};
pub use repository::SpeakerRepository;
