//! Statement loader
//!
//! Discovers Discover card statement workbooks in a folder and reads their
//! transaction rows into a uniform in-memory table. Ingestion is best
//! effort: rows whose date or amount cells cannot be coerced are dropped
//! silently rather than failing the whole run.
//!
//! Statement layout (fixed): the first worksheet carries 11 metadata rows,
//! followed by data rows with five columns — transaction date, post date,
//! description, amount, category.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;

use crate::error::{SorterError, SorterResult};
use crate::models::{Money, Transaction};

/// File-name prefix statements must carry
pub const STATEMENT_PREFIX: &str = "Discover";

/// Extension statements must carry
pub const STATEMENT_EXTENSION: &str = "xlsx";

/// Metadata rows at the top of every statement sheet
const METADATA_ROWS: usize = 11;

/// Enumerate statement files in `folder`, sorted by name for a stable
/// load order
///
/// # Errors
///
/// Returns `SorterError::NoInputFiles` when nothing matches the naming
/// convention.
pub fn discover_statements(folder: &Path) -> SorterResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)
        .map_err(|e| SorterError::Io(format!("Failed to read {}: {}", folder.display(), e)))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            name.starts_with(STATEMENT_PREFIX)
                && path
                    .extension()
                    .is_some_and(|e| e.eq_ignore_ascii_case(STATEMENT_EXTENSION))
        })
        .collect();

    if files.is_empty() {
        return Err(SorterError::NoInputFiles {
            folder: folder.to_path_buf(),
        });
    }

    files.sort();
    Ok(files)
}

/// Load every statement in `folder` into one transaction list
pub fn load_folder(folder: &Path) -> SorterResult<Vec<Transaction>> {
    let mut transactions = Vec::new();
    for path in discover_statements(folder)? {
        transactions.extend(load_statement(&path)?);
    }
    Ok(transactions)
}

/// Read one statement workbook
pub fn load_statement(path: &Path) -> SorterResult<Vec<Transaction>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SorterError::Statement(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            SorterError::Statement(format!("{}: workbook has no sheets", path.display()))
        })?
        .map_err(|e| SorterError::Statement(format!("{}: {}", path.display(), e)))?;

    Ok(range
        .rows()
        .skip(METADATA_ROWS)
        .filter_map(parse_row)
        .collect())
}

/// Coerce one sheet row into a transaction, or drop it
fn parse_row(row: &[Data]) -> Option<Transaction> {
    let trans_date = cell_date(row.first()?)?;
    let post_date = row.get(1).and_then(cell_date);
    let description = row.get(2).map(cell_text).unwrap_or_default();
    let amount = cell_amount(row.get(3)?)?;
    let category = row.get(4).map(cell_text).unwrap_or_default();

    Some(Transaction {
        trans_date,
        post_date,
        description,
        amount,
        category,
    })
}

/// Excel serial date to calendar date
///
/// The epoch is 1899-12-30, accounting for Excel's 1900 leap year bug.
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(chrono::Duration::days(serial as i64))
}

fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::Float(f) => excel_serial_to_date(*f),
        Data::Int(i) => excel_serial_to_date(*i as f64),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        Data::String(s) => parse_date_str(s.trim()),
        Data::DateTimeIso(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

/// Statement exports use `MM/DD/YYYY`; accept ISO dates as well
fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.split('T').next().unwrap_or(s);
    for format in ["%m/%d/%Y", "%Y-%m-%d", "%m/%d/%y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    None
}

fn cell_amount(cell: &Data) -> Option<Money> {
    match cell {
        Data::Float(f) => Some(Money::from_f64(*f)),
        Data::Int(i) => Some(Money::from_cents(i * 100)),
        Data::String(s) => Money::parse_statement(s),
        _ => None,
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
