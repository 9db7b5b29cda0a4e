//! Application layer for Greenroom.
//!
//! This crate provides the use cases that coordinate domain logic and
//! repositories: regenerating the denormalized views when a source
//! collection changes, and provisioning user profiles on account creation.

pub mod generate_usecase;
pub mod provision_usecase;
pub mod triggers;

pub use generate_usecase::GenerateViewsUseCase;
pub use provision_usecase::ProvisionUserUseCase;
pub use triggers::TriggerRouter;
