//! Inclusive calendar date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarError, sub_months};

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from two dates in either order.
    #[must_use]
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The `months` calendar months ending on `as_of`, inclusive of both ends.
    #[must_use]
    pub fn trailing_months(as_of: NaiveDate, months: u32) -> Self {
        Self {
            start: sub_months(as_of, months),
            end: as_of,
        }
    }

    /// Returns true if the date falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        assert!(DateRange::new(date(2026, 2, 1), date(2026, 1, 1)).is_err());
        assert!(DateRange::new(date(2026, 1, 1), date(2026, 1, 1)).is_ok());
    }

    #[test]
    fn test_between_orders_dates() {
        let range = DateRange::between(date(2026, 3, 1), date(2026, 1, 1));
        assert_eq!(range.start, date(2026, 1, 1));
        assert_eq!(range.end, date(2026, 3, 1));
    }

    #[test]
    fn test_trailing_months() {
        let range = DateRange::trailing_months(date(2026, 10, 19), 3);
        assert_eq!(range.start, date(2026, 7, 19));
        assert_eq!(range.end, date(2026, 10, 19));
        assert!(range.contains(date(2026, 7, 19)));
        assert!(range.contains(date(2026, 10, 19)));
        assert!(!range.contains(date(2026, 7, 18)));
        assert!(!range.contains(date(2026, 10, 20)));
    }
}
