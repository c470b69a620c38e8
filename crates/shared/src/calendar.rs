//! Calendar arithmetic on `NaiveDate`.
//!
//! All month counts are whole calendar months; partial months are truncated.

use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

/// Errors raised when building calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Month key is not in `YYYY-MM` form.
    #[error("invalid month key '{0}', expected YYYY-MM")]
    InvalidMonthKey(String),

    /// Month number outside 1-12.
    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    /// Year outside the supported calendar.
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),

    /// Range start is after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

/// Number of whole calendar months between two dates, regardless of order.
///
/// A month only counts once the day-of-month has been reached again, so
/// 2026-01-31 to 2026-02-28 is zero months.
#[must_use]
pub fn months_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let (from, to) = if a <= b { (a, b) } else { (b, a) };

    #[allow(clippy::cast_possible_wrap)]
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }

    u32::try_from(months).unwrap_or(0)
}

/// Whole months elapsed from `start` up to `as_of`; zero if `as_of` is before `start`.
#[must_use]
pub fn months_elapsed(start: NaiveDate, as_of: NaiveDate) -> u32 {
    if as_of < start {
        0
    } else {
        months_between(start, as_of)
    }
}

/// Adds calendar months, clamping the day to the end of the target month.
///
/// Saturates at `NaiveDate::MAX` instead of overflowing.
#[must_use]
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Subtracts calendar months, clamping the day to the end of the target month.
#[must_use]
pub fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2026, 1, 1), date(2026, 1, 1), 0)]
    #[case(date(2026, 1, 1), date(2026, 1, 31), 0)]
    #[case(date(2026, 1, 1), date(2026, 2, 1), 1)]
    #[case(date(2026, 1, 15), date(2026, 3, 14), 1)]
    #[case(date(2026, 1, 15), date(2026, 3, 15), 2)]
    #[case(date(2026, 1, 31), date(2026, 2, 28), 0)]
    #[case(date(2024, 6, 10), date(2026, 6, 10), 24)]
    fn test_months_between(#[case] a: NaiveDate, #[case] b: NaiveDate, #[case] expected: u32) {
        assert_eq!(months_between(a, b), expected);
        assert_eq!(months_between(b, a), expected);
    }

    #[test]
    fn test_months_elapsed_before_start_is_zero() {
        assert_eq!(months_elapsed(date(2026, 5, 1), date(2026, 1, 1)), 0);
        assert_eq!(months_elapsed(date(2026, 1, 1), date(2026, 5, 1)), 4);
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(date(2026, 1, 31), 1), date(2026, 2, 28));
        assert_eq!(add_months(date(2026, 1, 15), 12), date(2027, 1, 15));
        assert_eq!(add_months(date(2026, 3, 10), 0), date(2026, 3, 10));
    }

    #[test]
    fn test_sub_months_clamps_day() {
        assert_eq!(sub_months(date(2026, 5, 31), 3), date(2026, 2, 28));
        assert_eq!(sub_months(date(2026, 3, 10), 3), date(2025, 12, 10));
    }
}
