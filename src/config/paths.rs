//! Path management for spendwatch
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDWATCH_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/spendwatch`,
//!    `~/Library/Application Support/spendwatch`, `%APPDATA%\spendwatch`)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::SpendError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDWATCH_DATA_DIR";

/// Manages all paths used by spendwatch
#[derive(Debug, Clone)]
pub struct SpendPaths {
    /// Base directory for all spendwatch data
    base_dir: PathBuf,
}

impl SpendPaths {
    /// Create a new SpendPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, SpendError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the key-value snapshot files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default directory for export files
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| SpendError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("spendwatch"))
}
