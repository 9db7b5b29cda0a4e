//! Runtime configuration types.
//!
//! The schedule flag mirrors its original operator-facing shape: a
//! string-valued setting where only the exact value `"true"` enables
//! schedule-aware mapping. An entirely unset flag is a configuration error,
//! distinct from an explicit `"false"`.

use serde::{Deserialize, Serialize};

/// Root application configuration, loaded from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AppConfig {
    /// Schedule mapping settings. `None` means the operator never set the
    /// flag, which aborts aggregation runs instead of defaulting.
    pub schedule: Option<ScheduleConfig>,
}

/// The `[schedule]` section of the configuration file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ScheduleConfig {
    /// Only the exact string "true" enables schedule-aware mapping.
    pub enabled: String,
}

impl AppConfig {
    /// Returns whether schedule-aware mapping is enabled, or `None` when the
    /// flag was never configured.
    pub fn schedule_enabled(&self) -> Option<bool> {
        self.schedule.as_ref().map(|s| s.enabled == "true")
    }
}
