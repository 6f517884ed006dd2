//! Transaction date-range filter

use chrono::NaiveDate;

use crate::error::{SorterError, SorterResult};
use crate::models::Transaction;

/// Keep transactions whose transaction date falls in `[start, end]`,
/// inclusive on both ends
///
/// # Errors
///
/// Returns `SorterError::EmptyResult` when nothing survives; callers must
/// report "no transactions in range" rather than emit an empty artifact.
pub fn filter_by_range(
    transactions: Vec<Transaction>,
    start: NaiveDate,
    end: NaiveDate,
) -> SorterResult<Vec<Transaction>> {
    let filtered: Vec<Transaction> = transactions
        .into_iter()
        .filter(|txn| txn.trans_date >= start && txn.trans_date <= end)
        .collect();

    if filtered.is_empty() {
        return Err(SorterError::EmptyResult { start, end });
    }

    Ok(filtered)
}
