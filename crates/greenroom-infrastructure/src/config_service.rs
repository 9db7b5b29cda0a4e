//! Configuration service implementation.
//!
//! Loads the application configuration from `config.toml` in the platform
//! config directory and caches it. A missing or empty file yields the
//! default configuration, in which the schedule flag is unset; the
//! aggregation layer turns that into its configuration-missing abort.

use crate::paths::GreenroomPaths;
use greenroom_core::config::AppConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the application
/// configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading from the default platform config
    /// location.
    pub fn new() -> Result<Self, crate::paths::PathError> {
        Ok(Self::with_path(GreenroomPaths::config_file()?))
    }

    /// Creates a ConfigService reading from an explicit path. Used by tests
    /// and non-standard deployments.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config from {:?}: {}", self.path, e);
            AppConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<AppConfig, String> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read config file at {:?}: {}", self.path, e))?;

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse TOML from {:?}: {}", self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_unset_flag() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.get_config();
        assert_eq!(config.schedule_enabled(), None);
    }

    #[test]
    fn test_loads_schedule_flag() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\nenabled = \"true\"\n").unwrap();

        let service = ConfigService::with_path(path);
        assert_eq!(service.get_config().schedule_enabled(), Some(true));
    }

    #[test]
    fn test_cache_and_invalidate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\nenabled = \"false\"\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        assert_eq!(service.get_config().schedule_enabled(), Some(false));

        // Cached value survives the file changing underneath.
        std::fs::write(&path, "[schedule]\nenabled = \"true\"\n").unwrap();
        assert_eq!(service.get_config().schedule_enabled(), Some(false));

        service.invalidate_cache();
        assert_eq!(service.get_config().schedule_enabled(), Some(true));
    }
}
