//! Path management for statement-sorter
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `STATEMENT_SORTER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/statement-sorter` or
//!    `~/.config/statement-sorter`
//! 3. Windows: `%APPDATA%\statement-sorter`

use std::path::PathBuf;

use crate::error::SorterError;

/// Manages all paths used by statement-sorter
#[derive(Debug, Clone)]
pub struct SorterPaths {
    /// Base directory for all statement-sorter data
    base_dir: PathBuf,
}

impl SorterPaths {
    /// Create a new SorterPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SorterError> {
        let base_dir = if let Ok(custom) = std::env::var("STATEMENT_SORTER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SorterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/statement-sorter/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SorterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SorterError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SorterError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SorterError::Config("HOME environment variable not set".into()))
        })?;
    Ok(config_base.join("statement-sorter"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SorterError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SorterError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("statement-sorter"))
}
