//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod sort;

pub use sort::{handle_sort_command, SortArgs};
