//! Session domain module.
//!
//! - `model`: Raw session document (`Session`)
//! - `repository`: Read-side repository trait for the sessions collection

mod model;
mod repository;

pub use model::Session;
pub use repository::SessionRepository;
