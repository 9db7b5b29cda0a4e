//! Unified path management for Greenroom data and configuration.
//!
//! All collections live under the platform data directory; configuration
//! lives under the platform config directory. This keeps layout consistent
//! across Linux, macOS and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Greenroom.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/greenroom/
/// └── config.toml              # Application configuration
///
/// ~/.local/share/greenroom/
/// ├── sessions/                # Raw source collections
/// ├── speakers/
/// ├── schedule/
/// ├── generated_sessions/      # Generated output collections
/// ├── generated_speakers/
/// ├── generated_schedule/
/// └── users/                   # Provisioned user profiles
/// ```
pub struct GreenroomPaths;

impl GreenroomPaths {
    /// Returns the Greenroom configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g. `~/.config/greenroom/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("greenroom"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the Greenroom data directory, the parent of every collection
    /// directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g. `~/.local/share/greenroom/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("greenroom"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
