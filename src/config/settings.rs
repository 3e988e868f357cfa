//! Application settings for fintrack
//!
//! Settings are the installation-level knobs of the terminal front end
//! (log level, alert threshold, quick-contribution amount, local profile).
//! Per-session display choices live in [`UserPreferences`] inside the store.
//!
//! [`UserPreferences`]: crate::models::UserPreferences

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::Money;

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default tracing filter when `FINTRACK_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of entries in the overview's recent activity list
    #[serde(default = "default_recent_count")]
    pub recent_transaction_count: usize,

    /// Budget utilization (percent) above which the dashboard warns
    #[serde(default = "default_warning_percent")]
    pub budget_warning_percent: f64,

    /// Amount added by the quick-contribution action on a goal
    #[serde(default = "default_contribution")]
    pub default_contribution: Money,

    /// Display name of the local profile
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Email of the local profile
    #[serde(default)]
    pub user_email: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_recent_count() -> usize {
    5
}

fn default_warning_percent() -> f64 {
    90.0
}

fn default_contribution() -> Money {
    Money::from_dollars_cents(100, 0)
}

fn default_user_name() -> String {
    "Local User".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            recent_transaction_count: default_recent_count(),
            budget_warning_percent: default_warning_percent(),
            default_contribution: default_contribution(),
            user_name: default_user_name(),
            user_email: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
