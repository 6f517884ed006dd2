//! Sort pipeline
//!
//! Orchestrates one full run: load statements, filter by date range,
//! partition into periods, aggregate per period, emit the artifact.
//! One complete artifact is produced or none; there is no partial
//! success.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{SorterError, SorterResult};
use crate::export::{self, ChartKind, OutputFormat};
use crate::models::GroupingMode;
use crate::services::aggregate::{aggregate_period, PeriodReport};
use crate::services::{filter, partition};
use crate::statement;

/// Default output subfolder for workbook output
const DEFAULT_OUTPUT_DIR: &str = "CleanStatements";

/// Default output subfolder for csv output
const DEFAULT_OUTPUT_DIR_CSV: &str = "CleanStatementsCSV";

/// Everything one run needs, passed explicitly; the core reads no global
/// state
#[derive(Debug, Clone)]
pub struct SortRequest {
    /// Folder holding the statement workbooks
    pub folder: PathBuf,
    /// Inclusive range start
    pub start: NaiveDate,
    /// Inclusive range end
    pub end: NaiveDate,
    /// Period grouping mode
    pub mode: GroupingMode,
    /// Output directory; defaults next to the input folder when `None`
    pub output: Option<PathBuf>,
    /// Artifact shape
    pub format: OutputFormat,
    /// Summary-sheet chart (workbook output only)
    pub chart: ChartKind,
}

impl SortRequest {
    /// Base file name shared by all artifacts of this run
    pub fn base_name(&self) -> String {
        format!(
            "Sorted_{}_to_{}_{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d"),
            self.mode
        )
    }

    fn output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let sub = match self.format {
                OutputFormat::Xlsx => DEFAULT_OUTPUT_DIR,
                OutputFormat::Csv => DEFAULT_OUTPUT_DIR_CSV,
            };
            self.folder.join(sub)
        })
    }
}

/// Run the full pipeline, returning the artifact path
///
/// # Errors
///
/// - `NoInputFiles` when the folder holds no matching statements
/// - `EmptyResult` when no transactions fall in the range
/// - `Config` when the range itself is inverted
pub fn run(request: &SortRequest) -> SorterResult<PathBuf> {
    if request.start > request.end {
        return Err(SorterError::Config(format!(
            "Start date {} is after end date {}",
            request.start, request.end
        )));
    }

    let loaded = statement::load_folder(&request.folder)?;
    let filtered = filter::filter_by_range(loaded, request.start, request.end)?;
    let reports = build_reports(&filtered, request.start, request.end, request.mode);

    // Every surviving row can still lack a category; refuse to emit an
    // artifact with nothing in it
    if reports.is_empty() {
        return Err(SorterError::EmptyResult {
            start: request.start,
            end: request.end,
        });
    }

    export::emit(
        &reports,
        &request.output_dir(),
        &request.base_name(),
        request.format,
        request.chart,
    )
}

/// Partition the range and aggregate each period, skipping empty ones
pub fn build_reports(
    transactions: &[crate::models::Transaction],
    start: NaiveDate,
    end: NaiveDate,
    mode: GroupingMode,
) -> Vec<PeriodReport> {
    partition::partition(start, end, mode)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, period)| {
            let index = idx + 1;
            aggregate_period(
                period,
                period.label(mode, index),
                period.file_suffix(mode, index),
                transactions,
            )
        })
        .collect()
}
