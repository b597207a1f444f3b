// File: src/calendar.rs
//! Swiss public-holiday lookup and calendar-day helpers.
//!
//! The holiday table covers the federally observed days: New Year's Day,
//! Berchtoldstag, Good Friday, Easter Monday, Ascension Thursday,
//! Whit Monday, the National Day and the two Christmas days. The movable
//! feasts are precomputed per year, so the table is only valid for the
//! years listed in [`KNOWN_YEARS`]; lookups outside that window return
//! `false` (fail closed).

use crate::error::CommuteError;
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Years for which [`is_holiday`] gives authoritative answers.
pub const KNOWN_YEARS: [i32; 3] = [2024, 2025, 2026];

/// Upper bound on the day-by-day weekday search. A Monday recurs every
/// seven days and the holiday set is finite, so 60 days is ample.
const SEARCH_LIMIT: u32 = 60;

static HOLIDAYS: Lazy<HashSet<NaiveDate>> = Lazy::new(|| {
    #[rustfmt::skip]
    const TABLE: [(i32, u32, u32); 27] = [
        // 2024 (Easter Sunday: March 31)
        (2024, 1, 1), (2024, 1, 2), (2024, 3, 29), (2024, 4, 1),
        (2024, 5, 9), (2024, 5, 20), (2024, 8, 1), (2024, 12, 25), (2024, 12, 26),
        // 2025 (Easter Sunday: April 20)
        (2025, 1, 1), (2025, 1, 2), (2025, 4, 18), (2025, 4, 21),
        (2025, 5, 29), (2025, 6, 9), (2025, 8, 1), (2025, 12, 25), (2025, 12, 26),
        // 2026 (Easter Sunday: April 5)
        (2026, 1, 1), (2026, 1, 2), (2026, 4, 3), (2026, 4, 6),
        (2026, 5, 14), (2026, 5, 25), (2026, 8, 1), (2026, 12, 25), (2026, 12, 26),
    ];

    TABLE
        .iter()
        .map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("static holiday table"))
        .collect()
});

/// Membership test against the fixed holiday table.
///
/// Returns `false` for years outside [`KNOWN_YEARS`]. That is a documented
/// limitation rather than an error: the caller cannot do anything better
/// with an "unknown year" signal than proceed unadjusted.
pub fn is_holiday(date: NaiveDate) -> bool {
    HOLIDAYS.contains(&date)
}

/// Gregorian rule: divisible by 400, or by 4 and not by 100.
pub fn days_in_year(year: i32) -> u32 {
    if year % 400 == 0 || (year % 4 == 0 && year % 100 != 0) {
        366
    } else {
        365
    }
}

/// Finds the first `target` weekday that is not a holiday, starting one
/// calendar month after `from` and walking forward day by day.
///
/// The walk is bounded by [`SEARCH_LIMIT`]; exhausting it returns
/// `CommuteError::CalendarSearchExhausted` instead of looping.
pub fn next_valid_weekday(from: NaiveDate, target: Weekday) -> Result<NaiveDate, CommuteError> {
    let mut cursor = from
        .checked_add_months(Months::new(1))
        .ok_or(CommuteError::CalendarSearchExhausted)?;

    for _ in 0..SEARCH_LIMIT {
        if cursor.weekday() == target && !is_holiday(cursor) {
            return Ok(cursor);
        }
        cursor += Duration::days(1);
    }
    Err(CommuteError::CalendarSearchExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_year_rule() {
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn new_year_is_holiday() {
        assert!(is_holiday(date(2025, 1, 1)));
        assert!(!is_holiday(date(2025, 1, 3)));
    }

    #[test]
    fn whit_monday_2025() {
        assert!(is_holiday(date(2025, 6, 9)));
    }

    #[test]
    fn unknown_year_fails_closed() {
        // Jan 1 is always a holiday in practice, but 1999 is outside the table.
        assert!(!is_holiday(date(1999, 1, 1)));
    }
}
