//! Period partitioner
//!
//! Splits an inclusive date range into contiguous periods according to a
//! grouping mode. The output periods cover the range exactly: in
//! chronological order, no gaps, no overlaps, last period clipped to the
//! range end.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{end_of_month, GroupingMode, Period};

/// Partition `[start, end]` into periods
///
/// Biweekly boundary rule: a period starting on day 1–15 ends on the 15th,
/// a period starting on the 16th or later runs to month end. A range
/// starting exactly on the 15th yields a one-day first period.
///
/// `start > end` produces no periods; validating the range is the
/// caller's responsibility.
pub fn partition(start: NaiveDate, end: NaiveDate, mode: GroupingMode) -> Vec<Period> {
    let mut periods = Vec::new();
    let mut current = start;

    while current <= end {
        let period_end = match mode {
            GroupingMode::Weekly => current + Duration::days(6),
            GroupingMode::Biweekly => {
                if current.day() <= 15 {
                    current.with_day(15).expect("day 15 exists in every month")
                } else {
                    end_of_month(current)
                }
            }
            GroupingMode::Monthly => end_of_month(current),
        };

        let clipped = period_end.min(end);
        periods.push(Period::new(current, clipped));
        current = clipped + Duration::days(1);
    }

    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Concatenating the periods must reconstruct [start, end] exactly.
    fn assert_covers(periods: &[Period], start: NaiveDate, end: NaiveDate) {
        assert!(!periods.is_empty());
        assert_eq!(periods.first().unwrap().start, start);
        assert_eq!(periods.last().unwrap().end, end);
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end + Duration::days(1), pair[1].start);
        }
        for p in periods {
            assert!(p.start <= p.end);
        }
    }

    #[test]
    fn test_monthly_single_period() {
        let periods = partition(date(2025, 1, 1), date(2025, 1, 31), GroupingMode::Monthly);
        assert_eq!(periods, vec![Period::new(date(2025, 1, 1), date(2025, 1, 31))]);
    }

    #[test]
    fn test_monthly_clips_last_period() {
        let periods = partition(date(2025, 1, 15), date(2025, 3, 10), GroupingMode::Monthly);
        assert_eq!(
            periods,
            vec![
                Period::new(date(2025, 1, 15), date(2025, 1, 31)),
                Period::new(date(2025, 2, 1), date(2025, 2, 28)),
                Period::new(date(2025, 3, 1), date(2025, 3, 10)),
            ]
        );
        assert_covers(&periods, date(2025, 1, 15), date(2025, 3, 10));
    }

    #[test]
    fn test_biweekly_splits_at_fifteenth() {
        let periods = partition(date(2025, 1, 1), date(2025, 1, 20), GroupingMode::Biweekly);
        assert_eq!(
            periods,
            vec![
                Period::new(date(2025, 1, 1), date(2025, 1, 15)),
                Period::new(date(2025, 1, 16), date(2025, 1, 20)),
            ]
        );
    }

    #[test]
    fn test_biweekly_start_on_fifteenth_is_one_day() {
        let periods = partition(date(2025, 1, 15), date(2025, 1, 31), GroupingMode::Biweekly);
        assert_eq!(
            periods,
            vec![
                Period::new(date(2025, 1, 15), date(2025, 1, 15)),
                Period::new(date(2025, 1, 16), date(2025, 1, 31)),
            ]
        );
    }

    #[test]
    fn test_biweekly_across_months() {
        let periods = partition(date(2025, 1, 16), date(2025, 2, 20), GroupingMode::Biweekly);
        assert_eq!(
            periods,
            vec![
                Period::new(date(2025, 1, 16), date(2025, 1, 31)),
                Period::new(date(2025, 2, 1), date(2025, 2, 15)),
                Period::new(date(2025, 2, 16), date(2025, 2, 20)),
            ]
        );
        assert_covers(&periods, date(2025, 1, 16), date(2025, 2, 20));
    }

    #[test]
    fn test_weekly_seven_day_windows() {
        let periods = partition(date(2025, 1, 1), date(2025, 1, 20), GroupingMode::Weekly);
        assert_eq!(
            periods,
            vec![
                Period::new(date(2025, 1, 1), date(2025, 1, 7)),
                Period::new(date(2025, 1, 8), date(2025, 1, 14)),
                Period::new(date(2025, 1, 15), date(2025, 1, 20)),
            ]
        );
    }

    #[test]
    fn test_single_day_range() {
        for mode in GroupingMode::ALL {
            let periods = partition(date(2025, 3, 31), date(2025, 3, 31), mode);
            assert_eq!(periods, vec![Period::new(date(2025, 3, 31), date(2025, 3, 31))]);
        }
    }

    #[test]
    fn test_inverted_range_yields_no_periods() {
        for mode in GroupingMode::ALL {
            assert!(partition(date(2025, 2, 1), date(2025, 1, 1), mode).is_empty());
        }
    }

    #[test]
    fn test_coverage_across_modes_and_ranges() {
        let ranges = [
            (date(2024, 11, 20), date(2025, 2, 3)),
            (date(2025, 1, 1), date(2025, 12, 31)),
            (date(2024, 2, 10), date(2024, 3, 1)), // leap February
        ];
        for (start, end) in ranges {
            for mode in GroupingMode::ALL {
                let periods = partition(start, end, mode);
                assert_covers(&periods, start, end);
            }
        }
    }
}
