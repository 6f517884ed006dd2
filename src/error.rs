//! Custom error types for statement-sorter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for statement-sorter operations
#[derive(Error, Debug)]
pub enum SorterError {
    /// No statement files matched the expected naming convention
    #[error("No Discover .xlsx statement files found in {folder}")]
    NoInputFiles { folder: PathBuf },

    /// No transactions survived the date-range filter
    #[error("No transactions found between {start} and {end}")]
    EmptyResult { start: NaiveDate, end: NaiveDate },

    /// Invalid grouping mode string
    #[error("Unsupported grouping mode: {0}")]
    UnsupportedGrouping(String),

    /// A statement workbook could not be opened or read
    #[error("Statement error: {0}")]
    Statement(String),

    /// Errors while writing the output artifact
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SorterError {
    /// Check if this error means the requested range held no data
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }

    /// Check if this is a grouping-mode error
    pub fn is_unsupported_grouping(&self) -> bool {
        matches!(self, Self::UnsupportedGrouping(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SorterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SorterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<calamine::Error> for SorterError {
    fn from(err: calamine::Error) -> Self {
        Self::Statement(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for SorterError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for statement-sorter operations
pub type SorterResult<T> = Result<T, SorterError>;
