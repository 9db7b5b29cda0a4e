//! Schedule domain module.
//!
//! - `model`: Raw schedule day document (`ScheduleEntry`, `Timeslot`)
//! - `repository`: Read-side repository trait for the schedule collection

mod model;
mod repository;

pub use model::{ScheduleEntry, Timeslot};
pub use repository::ScheduleRepository;
