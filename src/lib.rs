//! statement-sorter - Sort credit-card statements into period reports
//!
//! This library loads Discover statement workbooks from a folder,
//! filters their transactions to an inclusive date range, partitions
//! the range into weekly, biweekly, or monthly periods, aggregates
//! spending per category within each period, and writes either a
//! multi-tab summary workbook or one csv file per period.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, periods)
//! - `statement`: Statement discovery and workbook parsing
//! - `services`: Business logic layer (filter, partition, aggregate)
//! - `export`: Workbook and csv emitters
//!
//! # Example
//!
//! ```rust,ignore
//! use statement_sorter::services::{run, SortRequest};
//!
//! let artifact = run(&request)?;
//! println!("wrote {}", artifact.display());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod statement;

pub use error::SorterError;
