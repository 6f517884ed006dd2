//! Business logic layer
//!
//! Each service is a small, pure step of the sort pipeline; `report`
//! glues them together into one run.

pub mod aggregate;
pub mod filter;
pub mod partition;
pub mod report;

pub use aggregate::{aggregate_period, CategorySummary, PeriodReport};
pub use report::{run, SortRequest};
