//! CLI command handler for sorting statements
//!
//! Bridges clap argument parsing with the sort pipeline. Arguments
//! given on the command line win; anything omitted falls back to the
//! value remembered from the previous run.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::{Settings, SorterPaths};
use crate::error::{SorterError, SorterResult};
use crate::export::{ChartKind, OutputFormat};
use crate::models::GroupingMode;
use crate::services::{run, SortRequest};

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Folder holding the Discover statement workbooks
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Start of the date range (YYYY-MM-DD, inclusive)
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// End of the date range (YYYY-MM-DD, inclusive)
    #[arg(short, long)]
    pub end: Option<NaiveDate>,

    /// How to split the range into periods
    #[arg(short, long, value_enum)]
    pub grouping: Option<GroupingMode>,

    /// Output directory (defaults to a subfolder next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output artifact shape
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Chart drawn on each summary sheet (xlsx output only)
    #[arg(long, value_enum)]
    pub chart: Option<ChartKind>,
}

impl SortArgs {
    /// Merge the arguments over remembered settings into a full request
    ///
    /// # Errors
    ///
    /// Returns `Config` when the folder or either date is missing from
    /// both the arguments and the saved settings.
    pub fn into_request(self, settings: &Settings) -> SorterResult<SortRequest> {
        let folder = self
            .folder
            .or_else(|| settings.last_input_folder.clone())
            .ok_or_else(|| {
                SorterError::Config("No statement folder given (use --folder)".into())
            })?;
        let start = self.start.or(settings.start_date).ok_or_else(|| {
            SorterError::Config("No start date given (use --start YYYY-MM-DD)".into())
        })?;
        let end = self.end.or(settings.end_date).ok_or_else(|| {
            SorterError::Config("No end date given (use --end YYYY-MM-DD)".into())
        })?;

        Ok(SortRequest {
            folder,
            start,
            end,
            mode: self.grouping.unwrap_or(settings.grouping),
            output: self.output.or_else(|| settings.last_output.clone()),
            format: self.format.unwrap_or(settings.output_format),
            chart: self.chart.unwrap_or(settings.chart),
        })
    }
}

/// Handle the sort command
pub fn handle_sort_command(
    paths: &SorterPaths,
    mut settings: Settings,
    args: SortArgs,
) -> SorterResult<()> {
    let request = args.into_request(&settings)?;
    let artifact = run(&request)?;

    println!("Sorted statements written to: {}", artifact.display());

    // Remember this run so the next one can omit unchanged arguments
    settings.last_input_folder = Some(request.folder.clone());
    settings.last_output = request.output.clone();
    settings.start_date = Some(request.start);
    settings.end_date = Some(request.end);
    settings.grouping = request.mode;
    settings.output_format = request.format;
    settings.chart = request.chart;
    settings.save(paths)?;

    Ok(())
}
