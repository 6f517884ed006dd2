//! User settings for statement-sorter
//!
//! Remembers the last-used folder, date range, grouping, and output
//! options between runs. Settings are loaded and saved by the CLI layer
//! only; the sort pipeline takes an explicit request and never reads
//! this state.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::SorterPaths;
use crate::error::SorterError;
use crate::export::{ChartKind, OutputFormat};
use crate::models::GroupingMode;

/// Persisted user preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Folder the last run read statements from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_input_folder: Option<PathBuf>,

    /// Output directory of the last run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_output: Option<PathBuf>,

    /// Start of the last date range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// End of the last date range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Last grouping mode
    #[serde(default)]
    pub grouping: GroupingMode,

    /// Last output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Last chart selection
    #[serde(default)]
    pub chart: ChartKind,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            last_input_folder: None,
            last_output: None,
            start_date: None,
            end_date: None,
            grouping: GroupingMode::default(),
            output_format: OutputFormat::default(),
            chart: ChartKind::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &SorterPaths) -> Result<Self, SorterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SorterError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SorterError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SorterPaths) -> Result<(), SorterError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SorterError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SorterError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
