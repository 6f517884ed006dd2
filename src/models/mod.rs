//! Core data models for statement-sorter

pub mod money;
pub mod period;
pub mod transaction;

pub use money::Money;
pub use period::{end_of_month, GroupingMode, Period};
pub use transaction::Transaction;
