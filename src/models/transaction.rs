//! Transaction record loaded from a statement

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// A single statement row after coercion
///
/// Rows are immutable once loaded; the pipeline filters and groups them but
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (always present after loading)
    pub trans_date: NaiveDate,
    /// Posting date, when the statement provides one
    pub post_date: Option<NaiveDate>,
    /// Merchant / description text
    pub description: String,
    /// Signed amount; expenses and payments carry opposite signs upstream
    pub amount: Money,
    /// Category label assigned by the card issuer (may be empty)
    pub category: String,
}

impl Transaction {
    /// Create a transaction with no posting date
    pub fn new(
        trans_date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            trans_date,
            post_date: None,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }
}
