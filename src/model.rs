// File: src/model.rs
//! Core data types plus the routing-provider wire contract.
//!
//! The wire structs mirror the JSON shape every mainstream directions API
//! returns (status string, routes, legs with duration/distance value-text
//! pairs, mode-tagged steps). The crate depends only on this shape, not on
//! a specific provider.

use chrono::NaiveTime;
use serde::Deserialize;
use std::fmt;
use strum::EnumIter;

// --- Geocoding ---

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

// --- Route requests ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Driving,
    Transit,
}

impl TravelMode {
    /// Lowercase form used in request query parameters.
    pub fn as_param(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
        }
    }

    /// Matches the uppercase tag the provider puts on itinerary steps.
    pub fn matches_step_tag(self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case(self.as_param())
    }
}

/// Time constraint on a transit query. `DepartAt`/`ArriveBy` are resolved
/// against the current day, mirroring the form inputs they come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeConstraint {
    DepartAt(NaiveTime),
    ArriveBy(NaiveTime),
    None,
}

// --- Route responses ---

/// A localized display string with its numeric magnitude (seconds for
/// durations, meters for distances).
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

/// Provider timestamp: display text plus seconds since the Unix epoch.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeStamp {
    pub text: String,
    pub value: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteStep {
    pub travel_mode: String,
    pub duration: Option<TextValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    pub duration: Option<TextValue>,
    pub distance: Option<TextValue>,
    pub departure_time: Option<TimeStamp>,
    pub arrival_time: Option<TimeStamp>,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<Route>,
}

// --- Comparison & verdict ---

/// Deduction-eligibility verdict derived from the round-trip time delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Verdict {
    Eligible,
    LikelyEligible,
    NotEligible,
}

impl Verdict {
    /// Fixed thresholds: strictly more than 90 minutes qualifies, 61-90 is
    /// borderline, 60 or less does not qualify.
    pub fn classify(delta_minutes: i64) -> Self {
        if delta_minutes > 90 {
            Verdict::Eligible
        } else if delta_minutes > 60 {
            Verdict::LikelyEligible
        } else {
            Verdict::NotEligible
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Eligible => write!(f, "Der Abzug ist möglich."),
            Verdict::LikelyEligible => write!(f, "Der Abzug ist wahrscheinlich möglich."),
            Verdict::NotEligible => write!(f, "Der Abzug ist nicht möglich."),
        }
    }
}

/// Same-day round-trip comparison. Owned by the current calculation and
/// superseded, not merged, by the next run for the same panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommuteComparison {
    pub car_minutes_round_trip: i64,
    pub transit_minutes_round_trip: i64,
    pub delta_minutes: i64,
    pub verdict: Verdict,
}

impl CommuteComparison {
    /// Combines the settled results. Either operand may be missing (its
    /// query failed); a missing operand contributes zero minutes rather
    /// than blocking the combination.
    pub fn combine(car_one_way_minutes: Option<i64>, transit_minutes_round_trip: i64) -> Self {
        let car_minutes_round_trip = car_one_way_minutes.unwrap_or(0) * 2;
        let delta_minutes = transit_minutes_round_trip - car_minutes_round_trip;
        Self {
            car_minutes_round_trip,
            transit_minutes_round_trip,
            delta_minutes,
            verdict: Verdict::classify(delta_minutes),
        }
    }
}
