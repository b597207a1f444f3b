// File: src/comparator.rs
//! Per-panel orchestration: geocode both addresses, fan out the route
//! queries, join, combine, classify.
//!
//! This is the single source of truth for the calculation workflow. The
//! report layer only renders what is assembled here; no numeric value is
//! ever recovered from rendered text.

use crate::calendar;
use crate::client::RouteProvider;
use crate::error::CommuteError;
use crate::model::{CommuteComparison, Coordinates, RouteLeg, TimeConstraint, TravelMode};
use crate::panels::InputPanel;
use crate::summary::{self, Itinerary};
use crate::workdays::{self, WorkdayEstimate};
use chrono::{Datelike, NaiveDate, Weekday};

/// One overview route section (Auto or ÖV): structured values kept for
/// later combination, text rendered only at the report stage.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSection {
    /// Provider's localized one-way duration, e.g. "23 mins".
    pub duration_text: String,
    /// Provider's localized one-way distance, e.g. "12.3 km".
    pub distance_text: String,
    pub one_way_minutes: i64,
    pub one_way_km: f64,
}

impl RouteSection {
    /// First leg only, like the itinerary summarizer. A missing duration or
    /// distance contributes zero rather than discarding the section.
    fn from_legs(legs: &[RouteLeg]) -> Option<Self> {
        let leg = legs.first()?;
        let seconds = leg.duration.as_ref().map(|d| d.value).unwrap_or(0.0);
        let meters = leg.distance.as_ref().map(|d| d.value).unwrap_or(0.0);
        Some(Self {
            duration_text: leg
                .duration
                .as_ref()
                .map(|d| d.text.clone())
                .unwrap_or_default(),
            distance_text: leg
                .distance
                .as_ref()
                .map(|d| d.text.clone())
                .unwrap_or_default(),
            one_way_minutes: (seconds / 60.0).round() as i64,
            one_way_km: meters / 1000.0,
        })
    }
}

/// Everything one calculation produced. Each section is independently
/// optional: a failed query leaves its section `None` (rendered as
/// placeholders) without blocking the others. Re-running a panel replaces
/// the previous outcome wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelOutcome {
    pub home: Option<Coordinates>,
    pub work: Option<Coordinates>,
    pub workdays: Option<WorkdayEstimate>,
    pub drive: Option<RouteSection>,
    pub transit_overview: Option<RouteSection>,
    pub work_start: Option<Itinerary>,
    pub work_end: Option<Itinerary>,
    pub comparison: Option<CommuteComparison>,
}

/// Runs calculations against a route provider, anchored to a reference
/// date (normally today) that supplies the workday-estimate denominator.
pub struct CommuteCalculator<'a, P: RouteProvider> {
    provider: &'a P,
    reference_date: NaiveDate,
}

impl<'a, P: RouteProvider> CommuteCalculator<'a, P> {
    pub fn new(provider: &'a P, reference_date: NaiveDate) -> Self {
        Self {
            provider,
            reference_date,
        }
    }

    /// Holiday adjustment: a reference date falling on a known holiday is
    /// replaced by the next valid Monday. An exhausted search is logged
    /// and the unadjusted date kept.
    pub fn effective_reference(&self) -> NaiveDate {
        if !calendar::is_holiday(self.reference_date) {
            return self.reference_date;
        }
        match calendar::next_valid_weekday(self.reference_date, Weekday::Mon) {
            Ok(shifted) => {
                log::info!(
                    "Reference date {} is a holiday, shifted to {}",
                    self.reference_date,
                    shifted
                );
                shifted
            }
            Err(e) => {
                log::error!("Holiday shift failed: {}", e);
                self.reference_date
            }
        }
    }

    /// Calculates one panel.
    ///
    /// Workflow:
    /// 1. Workday estimate from the panel's date range (invalid range logs
    ///    and leaves the fields blank).
    /// 2. Geocode home and work. Either failure aborts the panel with
    ///    `GeocodeFailed`; no partial sections are produced.
    /// 3. Fan out four independent queries and join: driving home->work,
    ///    transit overview home->work, transit arriving by the work start
    ///    time, transit work->home departing at the work end time.
    /// 4. Combine into the round-trip comparison. The combination runs only
    ///    after both time-constrained transit results have settled; a failed
    ///    operand counts as zero minutes.
    pub async fn calculate(&self, panel: &InputPanel) -> Result<PanelOutcome, CommuteError> {
        let mut outcome = PanelOutcome::default();

        match panel.date_range() {
            Ok(Some(range)) => {
                let year = self.effective_reference().year();
                outcome.workdays = Some(workdays::estimate(&range, year));
            }
            Ok(None) => {}
            Err(e) => log::warn!("Workday estimate skipped: {}", e),
        }

        // Both coordinates are required before any routing starts.
        outcome.home = Some(self.provider.geocode(&panel.home_address).await?);
        outcome.work = Some(self.provider.geocode(&panel.work_address).await?);

        let drive = self.provider.route(
            &panel.home_address,
            &panel.work_address,
            TravelMode::Driving,
            TimeConstraint::None,
        );
        let overview = self.provider.route(
            &panel.home_address,
            &panel.work_address,
            TravelMode::Transit,
            TimeConstraint::None,
        );
        let outbound = self.provider.route(
            &panel.home_address,
            &panel.work_address,
            TravelMode::Transit,
            TimeConstraint::ArriveBy(panel.work_start),
        );
        let inbound = self.provider.route(
            &panel.work_address,
            &panel.home_address,
            TravelMode::Transit,
            TimeConstraint::DepartAt(panel.work_end),
        );
        let (drive, overview, outbound, inbound) =
            tokio::join!(drive, overview, outbound, inbound);

        let mut car_one_way = None;
        match drive {
            Ok(legs) => {
                outcome.drive = RouteSection::from_legs(&legs);
                car_one_way = outcome.drive.as_ref().map(|s| s.one_way_minutes);
            }
            Err(e) => log::warn!("Driving route failed: {}", e),
        }

        match overview {
            Ok(legs) => outcome.transit_overview = RouteSection::from_legs(&legs),
            Err(e) => log::warn!("ÖV overview route failed: {}", e),
        }

        outcome.work_start = match outbound {
            Ok(legs) => Some(summary::summarize(&legs)),
            Err(e) => {
                log::warn!("ÖV route (Arbeitsbeginn) failed: {}", e);
                None
            }
        };
        outcome.work_end = match inbound {
            Ok(legs) => Some(summary::summarize(&legs)),
            Err(e) => {
                log::warn!("ÖV route (Arbeitsende) failed: {}", e);
                None
            }
        };

        let transit_round_trip = outcome
            .work_start
            .as_ref()
            .map(Itinerary::travel_plus_waiting)
            .unwrap_or(0)
            + outcome
                .work_end
                .as_ref()
                .map(Itinerary::travel_plus_waiting)
                .unwrap_or(0);
        outcome.comparison = Some(CommuteComparison::combine(car_one_way, transit_round_trip));

        Ok(outcome)
    }
}
