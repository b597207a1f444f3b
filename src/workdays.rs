// File: src/workdays.rs
//! Prorates a calendar-day span into estimated workdays at 220 and 240
//! working days per year.
//!
//! Rounding policy: round half away from zero, applied consistently here
//! and in the minute arithmetic elsewhere (this matches `f64::round`).

use crate::calendar::days_in_year;
use crate::error::CommuteError;
use chrono::NaiveDate;

/// An inclusive date span. Construction enforces `start <= end`; an
/// inverted or unparseable range is `CommuteError::InvalidRange` and the
/// caller renders blank workday fields instead of failing the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CommuteError> {
        if start > end {
            return Err(CommuteError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Parses two `YYYY-MM-DD` strings. Any parse failure is `InvalidRange`.
    pub fn parse(start: &str, end: &str) -> Result<Self, CommuteError> {
        let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
            .map_err(|_| CommuteError::InvalidRange)?;
        let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
            .map_err(|_| CommuteError::InvalidRange)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Calendar days in the span, inclusive of both endpoints. Always >= 1.
    pub fn total_calendar_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Derived per calculation, never persisted. Superseded wholesale by the
/// next run for the same panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayEstimate {
    pub total_calendar_days: i64,
    pub workdays_at_220: i64,
    pub workdays_at_240: i64,
}

fn prorate(total_days: i64, year_days: u32, per_year: i64) -> i64 {
    (total_days as f64 / f64::from(year_days) * per_year as f64).round() as i64
}

/// Estimates workdays in `range`, denominated by the length of
/// `reference_year` (the holiday-shifted reference date's year).
pub fn estimate(range: &DateRange, reference_year: i32) -> WorkdayEstimate {
    let total = range.total_calendar_days();
    let year_days = days_in_year(reference_year);

    WorkdayEstimate {
        total_calendar_days: total,
        workdays_at_220: prorate(total, year_days, 220),
        workdays_at_240: prorate(total, year_days, 240),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inverted_range_is_invalid() {
        assert_eq!(
            DateRange::new(date(2025, 6, 2), date(2025, 6, 1)),
            Err(CommuteError::InvalidRange)
        );
    }

    #[test]
    fn unparseable_date_is_invalid() {
        assert_eq!(
            DateRange::parse("2025-13-01", "2025-12-31"),
            Err(CommuteError::InvalidRange)
        );
        assert_eq!(
            DateRange::parse("gestern", "2025-12-31"),
            Err(CommuteError::InvalidRange)
        );
    }

    #[test]
    fn single_day_counts_one() {
        let range = DateRange::new(date(2025, 3, 3), date(2025, 3, 3)).unwrap();
        assert_eq!(range.total_calendar_days(), 1);
    }

    #[test]
    fn full_year_is_exact() {
        let range = DateRange::parse("2025-01-01", "2025-12-31").unwrap();
        let est = estimate(&range, 2025);
        assert_eq!(est.total_calendar_days, 365);
        assert_eq!(est.workdays_at_220, 220);
        assert_eq!(est.workdays_at_240, 240);
    }
}
