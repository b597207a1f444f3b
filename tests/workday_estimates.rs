// File: ./tests/workday_estimates.rs
//! Workday proration properties.

use arbeitsweg::workdays::{DateRange, estimate};
use chrono::{Duration, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn inclusive_day_count() {
    let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
    assert_eq!(range.total_calendar_days(), 31);
}

#[test]
fn full_year_2025_is_exact() {
    let range = DateRange::parse("2025-01-01", "2025-12-31").unwrap();
    let est = estimate(&range, 2025);
    assert_eq!(est.total_calendar_days, 365);
    assert_eq!(est.workdays_at_220, 220);
    assert_eq!(est.workdays_at_240, 240);
}

#[test]
fn full_leap_year_is_exact() {
    let range = DateRange::parse("2024-01-01", "2024-12-31").unwrap();
    let est = estimate(&range, 2024);
    assert_eq!(est.total_calendar_days, 366);
    assert_eq!(est.workdays_at_220, 220);
    assert_eq!(est.workdays_at_240, 240);
}

#[test]
fn leap_denominator_shrinks_estimate() {
    // Same 366-day numerator, but denominated by a common year overshoots.
    let range = DateRange::parse("2024-01-01", "2024-12-31").unwrap();
    let est = estimate(&range, 2023);
    assert!(est.workdays_at_220 > 220);
}

#[test]
fn half_year_rounds_half_away_from_zero() {
    // 183 / 366 * 220 = 110.0 exactly; 184 days tips over the midpoint.
    let range = DateRange::new(date(2024, 1, 1), date(2024, 7, 1)).unwrap();
    assert_eq!(range.total_calendar_days(), 183);
    assert_eq!(estimate(&range, 2024).workdays_at_220, 110);
}

#[test]
fn monotonic_in_range_length() {
    let start = date(2025, 1, 1);
    let mut previous = (0, 0);
    for extra in 0..365 {
        let range = DateRange::new(start, start + Duration::days(extra)).unwrap();
        let est = estimate(&range, 2025);
        assert!(est.workdays_at_220 >= previous.0);
        assert!(est.workdays_at_240 >= previous.1);
        previous = (est.workdays_at_220, est.workdays_at_240);
    }
}

#[test]
fn single_day_range() {
    let range = DateRange::new(date(2025, 6, 2), date(2025, 6, 2)).unwrap();
    let est = estimate(&range, 2025);
    assert_eq!(est.total_calendar_days, 1);
    assert_eq!(est.workdays_at_220, 1); // 1/365*220 = 0.60 rounds up
    assert_eq!(est.workdays_at_240, 1);
}
