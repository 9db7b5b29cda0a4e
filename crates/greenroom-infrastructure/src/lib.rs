//! Infrastructure layer for Greenroom.
//!
//! JSON directory-backed implementations of the core repository traits, plus
//! path resolution and configuration loading. Each collection is a directory
//! of `{key}.json` documents.

pub mod config_service;
pub mod json_dir_generated_repository;
pub mod json_dir_schedule_repository;
pub mod json_dir_session_repository;
pub mod json_dir_speaker_repository;
pub mod json_dir_user_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_dir_generated_repository::JsonDirGeneratedViewRepository;
pub use crate::json_dir_schedule_repository::JsonDirScheduleRepository;
pub use crate::json_dir_session_repository::JsonDirSessionRepository;
pub use crate::json_dir_speaker_repository::JsonDirSpeakerRepository;
pub use crate::json_dir_user_repository::JsonDirUserRepository;
pub use crate::storage::JsonDirStorage;
