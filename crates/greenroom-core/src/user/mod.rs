//! User provisioning domain module.
//!
//! - `model`: Identity-provider payload (`IdentityRecord`) and the stored
//!   profile (`UserProfile`)
//! - `repository`: Repository trait for the users collection

mod model;
mod repository;

pub use model::{IdentityRecord, ProviderRecord, UserProfile};
pub use repository::UserRepository;
