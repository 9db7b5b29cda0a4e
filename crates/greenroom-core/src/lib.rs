//! Core domain layer for Greenroom.
//!
//! Greenroom denormalizes three raw conference collections (sessions,
//! speakers, schedule) into precomputed generated views whenever a source
//! document changes, and provisions a user profile on account creation.
//!
//! This crate holds the domain models, the repository traits that abstract
//! over storage, and the pure mapping logic. Orchestration lives in
//! `greenroom-application`; storage implementations in
//! `greenroom-infrastructure`.

pub mod config;
pub mod error;
pub mod generated;
pub mod mapper;
pub mod schedule;
pub mod session;
pub mod speaker;
pub mod user;

// Re-export common error type
pub use error::GreenroomError;
