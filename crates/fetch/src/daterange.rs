//! Inclusive daily date ranges for download planning.

use chrono::{Days, NaiveDate};

use crate::error::FetchError;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidDateRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FetchError> {
        if start > end {
            return Err(FetchError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// A date range is never empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All days of the range in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut out = Vec::with_capacity(self.len());
        let mut day = self.start;
        while day <= self.end {
            out.push(day);
            day = day + Days::new(1);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn single_day_range() {
        let r = DateRange::new(d(1), d(1)).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.days(), vec![d(1)]);
    }

    #[test]
    fn multi_day_range_is_ascending() {
        let r = DateRange::new(d(1), d(4)).unwrap();
        assert_eq!(r.len(), 4);
        assert_eq!(r.days(), vec![d(1), d(2), d(3), d(4)]);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(matches!(
            DateRange::new(d(5), d(1)),
            Err(FetchError::InvalidDateRange { .. })
        ));
    }
}
