//! Reporting periods and grouping modes
//!
//! A `Period` is one contiguous date sub-range of a requested reporting
//! window. The partitioner (`services::partition`) guarantees that the
//! periods it produces cover the window exactly, in order, with no gaps.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SorterError;

/// Strategy used to split a date range into periods
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// 7-day windows from the range start
    Weekly,
    /// Month halves split at the 15th
    Biweekly,
    /// Calendar months
    #[default]
    Monthly,
}

impl GroupingMode {
    /// All supported modes, for help text and validation messages
    pub const ALL: [GroupingMode; 3] = [Self::Weekly, Self::Biweekly, Self::Monthly];
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Biweekly => write!(f, "biweekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for GroupingMode {
    type Err = SorterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" | "bi-weekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(SorterError::UnsupportedGrouping(other.to_string())),
        }
    }
}

/// One contiguous date sub-range, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Create a period; `start` must not exceed `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Human-readable label for sheet names and summaries
    ///
    /// `index` is the 1-based position of this period within the run and is
    /// only used for weekly labels.
    pub fn label(&self, mode: GroupingMode, index: usize) -> String {
        match mode {
            GroupingMode::Monthly => self.start.format("%B %Y").to_string(),
            GroupingMode::Biweekly => {
                let half = if self.start.day() <= 15 {
                    "First Half"
                } else {
                    "Second Half"
                };
                format!(
                    "{} ({} - {})",
                    half,
                    self.start.format("%b %d"),
                    self.end.format("%b %d")
                )
            }
            GroupingMode::Weekly => format!(
                "Week {} ({} - {})",
                index,
                self.start.format("%b %d"),
                self.end.format("%b %d")
            ),
        }
    }

    /// Filesystem-safe label used in per-period csv file names
    pub fn file_suffix(&self, mode: GroupingMode, index: usize) -> String {
        match mode {
            GroupingMode::Monthly => self.start.format("%B_%Y").to_string(),
            GroupingMode::Biweekly => {
                let half = if self.start.day() <= 15 {
                    "First_Half"
                } else {
                    "Second_Half"
                };
                format!(
                    "{}_{}_to_{}",
                    half,
                    self.start.format("%b_%d"),
                    self.end.format("%b_%d")
                )
            }
            GroupingMode::Weekly => format!(
                "Week_{}_{}_to_{}",
                index,
                self.start.format("%b_%d"),
                self.end.format("%b_%d")
            ),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Last day of the calendar month containing `date`
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.expect("first of month is always valid") - Duration::days(1)
}
