//! Category aggregator
//!
//! Groups a period's transactions by category, computes per-category
//! totals, and splits the grand total into credit-card payments versus
//! expenses. Amounts for payments and expenses carry opposite signs
//! upstream, so the net is a true balance.

use std::collections::HashMap;

use crate::models::{Money, Period, Transaction};

/// Substrings (lowercased) that mark a category as a payment/credit
const PAYMENT_MARKERS: [&str; 2] = ["payment", "credit"];

/// One category's transactions and total within a period
#[derive(Debug, Clone)]
pub struct CategorySummary {
    /// Category label, exactly as the statement spelled it
    pub category: String,
    /// Sum of all amounts in this category
    pub total: Money,
    /// Transactions sorted by transaction date ascending
    pub transactions: Vec<Transaction>,
}

impl CategorySummary {
    /// Whether this category counts as a payment/credit rather than an
    /// expense
    pub fn is_payment(&self) -> bool {
        let lowered = self.category.to_lowercase();
        PAYMENT_MARKERS.iter().any(|m| lowered.contains(m))
    }
}

/// Aggregated view of one period
#[derive(Debug, Clone)]
pub struct PeriodReport {
    /// The period covered
    pub period: Period,
    /// Display label derived from the grouping mode
    pub label: String,
    /// Filesystem-safe label for per-period output files
    pub file_suffix: String,
    /// Categories sorted by total amount descending
    pub categories: Vec<CategorySummary>,
    /// Sum of payment/credit category totals
    pub payment_total: Money,
    /// Sum of all other category totals
    pub expense_total: Money,
    /// expense_total + payment_total
    pub net: Money,
}

impl PeriodReport {
    /// Total number of transactions across all categories
    pub fn transaction_count(&self) -> usize {
        self.categories.iter().map(|c| c.transactions.len()).sum()
    }
}

/// Aggregate the transactions falling inside `period`
///
/// Returns `None` when the period holds no transactions; such periods are
/// skipped entirely downstream, producing no sheets or csv blocks.
/// Rows with an empty category are excluded, matching the source data's
/// treatment of uncategorized rows.
pub fn aggregate_period(
    period: Period,
    label: String,
    file_suffix: String,
    transactions: &[Transaction],
) -> Option<PeriodReport> {
    let mut by_category: HashMap<String, Vec<Transaction>> = HashMap::new();
    for txn in transactions {
        if !period.contains(txn.trans_date) || txn.category.is_empty() {
            continue;
        }
        by_category
            .entry(txn.category.clone())
            .or_default()
            .push(txn.clone());
    }

    if by_category.is_empty() {
        return None;
    }

    let mut categories: Vec<CategorySummary> = by_category
        .into_iter()
        .map(|(category, mut txns)| {
            txns.sort_by_key(|t| t.trans_date);
            let total: Money = txns.iter().map(|t| t.amount).sum();
            CategorySummary {
                category,
                total,
                transactions: txns,
            }
        })
        .collect();

    // Largest totals first; ties broken by name so output order is stable
    categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

    let mut payment_total = Money::zero();
    let mut expense_total = Money::zero();
    for summary in &categories {
        if summary.is_payment() {
            payment_total += summary.total;
        } else {
            expense_total += summary.total;
        }
    }

    Some(PeriodReport {
        period,
        label,
        file_suffix,
        categories,
        payment_total,
        expense_total,
        net: expense_total + payment_total,
    })
}
