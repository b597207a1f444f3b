// File: src/summary.rs
//! Reduces a raw directions leg to the figures the report renders.

use crate::model::{RouteLeg, TravelMode};
use chrono::DateTime;

/// Summary of one itinerary leg. Absent departure/arrival values are
/// legitimate (the provider omits timestamps on unconstrained queries) and
/// render as the placeholder, not as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub travel_minutes: i64,
    pub waiting_minutes: i64,
}

impl Itinerary {
    pub fn travel_plus_waiting(&self) -> i64 {
        self.travel_minutes + self.waiting_minutes
    }
}

fn round_minutes(seconds: f64) -> i64 {
    (seconds / 60.0).round() as i64
}

/// 12-hour clock with AM/PM, e.g. "07:42 AM".
fn format_clock(epoch_seconds: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_seconds, 0).map(|dt| dt.format("%I:%M %p").to_string())
}

/// Summarizes the first leg only; any further legs are ignored (known
/// limitation, multi-leg itineraries do not occur for single origin and
/// destination queries). An empty slice yields the all-absent itinerary.
///
/// Waiting time approximates "waiting for or walking between vehicles" as
/// total duration minus the sum of transit-vehicle step durations, floored
/// at zero.
pub fn summarize(legs: &[RouteLeg]) -> Itinerary {
    let Some(leg) = legs.first() else {
        return Itinerary::default();
    };

    let total_seconds = leg.duration.as_ref().map(|d| d.value).unwrap_or(0.0);
    let vehicle_seconds: f64 = leg
        .steps
        .iter()
        .filter(|s| TravelMode::Transit.matches_step_tag(&s.travel_mode))
        .filter_map(|s| s.duration.as_ref().map(|d| d.value))
        .sum();

    let waiting_seconds = total_seconds - vehicle_seconds;
    let waiting_minutes = if waiting_seconds > 0.0 {
        round_minutes(waiting_seconds)
    } else {
        0
    };

    Itinerary {
        departure: leg
            .departure_time
            .as_ref()
            .and_then(|t| format_clock(t.value)),
        arrival: leg.arrival_time.as_ref().and_then(|t| format_clock(t.value)),
        travel_minutes: round_minutes(total_seconds),
        waiting_minutes,
    }
}
