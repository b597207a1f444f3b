// File: src/error.rs
//! Failure taxonomy for a calculation run.
//!
//! None of these abort the session: callers degrade the affected output to
//! placeholders ("--") and log a diagnostic. `GeocodeFailed` is the only
//! variant that cancels a whole panel, since no section is useful without
//! both resolved coordinates.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommuteError {
    /// Start date after end date, or an unparseable date input.
    /// Callers skip the workday estimate and leave its fields blank.
    #[error("invalid date range")]
    InvalidRange,

    /// The provider could not resolve an address.
    #[error("geocoding failed: {0}")]
    GeocodeFailed(String),

    /// A single route query failed; only its own section degrades.
    #[error("route query failed: {0}")]
    RouteFailed(String),

    /// The bounded holiday-aware weekday search ran out of candidates.
    #[error("calendar search exhausted")]
    CalendarSearchExhausted,
}
