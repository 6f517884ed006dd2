//! Flat-text (CSV) report output
//!
//! Writes one file per period. Each file holds a block per category: a
//! `Category:` banner, a header row, the transactions, a subtotal row,
//! and a spacer line.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SorterError, SorterResult};
use crate::services::aggregate::PeriodReport;

use super::naming;

const HEADER: &str = "Trans. date,Post date,Description,Amount,Category";

/// Write one csv file per period into `dir`, returning the created paths
///
/// File names follow `{base}_{period suffix}.csv`, each resolved against
/// existing files so reruns never overwrite earlier output.
pub fn write_csv_reports(
    dir: &Path,
    base: &str,
    reports: &[PeriodReport],
) -> SorterResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(reports.len());

    for report in reports {
        let path = naming::next_available(dir, &format!("{}_{}", base, report.file_suffix), "csv");
        let file = std::fs::File::create(&path)
            .map_err(|e| SorterError::Export(format!("{}: {}", path.display(), e)))?;
        let mut writer = BufWriter::new(file);
        write_period(&mut writer, report)?;
        writer
            .flush()
            .map_err(|e| SorterError::Export(e.to_string()))?;
        written.push(path);
    }

    Ok(written)
}

fn write_period<W: Write>(writer: &mut W, report: &PeriodReport) -> SorterResult<()> {
    for summary in &report.categories {
        writeln!(writer, "Category: {},,,,", escape_csv(&summary.category))
            .map_err(|e| SorterError::Export(e.to_string()))?;
        writeln!(writer, "{}", HEADER).map_err(|e| SorterError::Export(e.to_string()))?;

        for txn in &summary.transactions {
            let post_date = txn
                .post_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            writeln!(
                writer,
                "{},{},{},{:.2},{}",
                txn.trans_date.format("%Y-%m-%d"),
                post_date,
                escape_csv(&txn.description),
                txn.amount.to_f64(),
                escape_csv(&txn.category)
            )
            .map_err(|e| SorterError::Export(e.to_string()))?;
        }

        writeln!(writer, ",,Subtotal:,{:.2},", summary.total.to_f64())
            .map_err(|e| SorterError::Export(e.to_string()))?;
        writeln!(writer).map_err(|e| SorterError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
