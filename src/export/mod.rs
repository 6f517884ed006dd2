//! Report emitter
//!
//! Boundary between the aggregation core and the artifact on disk. The
//! chart and format selectors live here: they shape the output file only
//! and never influence aggregation.

pub mod csv;
pub mod naming;
pub mod workbook;

use std::path::{Path, PathBuf};

use rust_xlsxwriter::ChartType;
use serde::{Deserialize, Serialize};

use crate::error::{SorterError, SorterResult};
use crate::services::aggregate::PeriodReport;

/// Chart drawn on each summary sheet (workbook output only)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// No chart
    None,
    #[default]
    Pie,
    Bar,
    Column,
    Doughnut,
    Radar,
}

impl ChartKind {
    /// Map to the writer's chart type; `None` suppresses the chart
    pub fn chart_type(self) -> Option<ChartType> {
        match self {
            Self::None => None,
            Self::Pie => Some(ChartType::Pie),
            Self::Bar => Some(ChartType::Bar),
            Self::Column => Some(ChartType::Column),
            Self::Doughnut => Some(ChartType::Doughnut),
            Self::Radar => Some(ChartType::Radar),
        }
    }
}

/// Output artifact shape
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One multi-tab .xlsx workbook
    #[default]
    Xlsx,
    /// One flat csv file per period
    Csv,
}

impl OutputFormat {
    /// File extension of the primary artifact
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// Write the aggregated reports to disk
///
/// Returns the artifact path: the workbook file for xlsx output, the
/// output directory for csv output (which holds one file per period).
/// Target paths are collision-resolved, never overwritten.
pub fn emit(
    reports: &[PeriodReport],
    output_dir: &Path,
    base_name: &str,
    format: OutputFormat,
    chart: ChartKind,
) -> SorterResult<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| SorterError::Export(format!("{}: {}", output_dir.display(), e)))?;

    match format {
        OutputFormat::Xlsx => {
            let path = naming::next_available(output_dir, base_name, format.extension());
            workbook::write_workbook(&path, reports, chart)?;
            Ok(path)
        }
        OutputFormat::Csv => {
            csv::write_csv_reports(output_dir, base_name, reports)?;
            Ok(output_dir.to_path_buf())
        }
    }
}
