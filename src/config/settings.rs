//! User settings for spendwatch
//!
//! Manages display preferences and how long notifications stay on screen.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use crate::error::SpendError;
use crate::storage::file_io::write_json_atomic;

/// User settings for spendwatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used by listings and tabular exports (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How long a non-sticky notification stays visible
    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

/// Date format used when none is configured or the configured one is unusable
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Whether chrono understands every specifier in `date_format`
pub fn is_valid_date_format(date_format: &str) -> bool {
    StrftimeItems::new(date_format).all(|item| !matches!(item, Item::Error))
}

fn default_notification_duration_ms() -> u64 {
    3000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            notification_duration_ms: default_notification_duration_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpendError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SpendError::Config(format!("Failed to parse settings file: {}", e)))?;

            if !is_valid_date_format(&settings.date_format) {
                tracing::warn!(
                    date_format = %settings.date_format,
                    "unsupported date format in settings, using {}",
                    DEFAULT_DATE_FORMAT
                );
                settings.date_format = DEFAULT_DATE_FORMAT.to_string();
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.notification_duration_ms, 3000);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "NT$".into();
        settings.notification_duration_ms = 0;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.notification_duration_ms, 3000);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SpendError::Config(_)));
    }

    #[test]
    fn test_unsupported_date_format_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.date_format, DEFAULT_DATE_FORMAT);
        assert!(is_valid_date_format("%d/%m/%Y %H:%M"));
        assert!(!is_valid_date_format("%Q"));
    }
}
