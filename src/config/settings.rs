//! User settings for Tally
//!
//! Manages user preferences including display formatting and the default
//! alert threshold.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;

/// User settings for Tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Spend/limit ratio at which budget warnings start firing
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_alert_threshold() -> f64 {
    0.8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            alert_threshold: default_alert_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create defaults if no settings file exists
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_file = paths.settings_file();

        if settings_file.exists() {
            let contents = std::fs::read_to_string(&settings_file)
                .map_err(|e| TallyError::Io(format!("Failed to read settings: {}", e)))?;
            let settings: Settings = serde_json::from_str(&contents)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
