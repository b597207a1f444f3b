// File: src/report.rs
//! German-language text rendering of a panel outcome.
//!
//! This is the whole presentation layer: every absent value renders as the
//! "--" placeholder, and re-rendering a panel replaces its previous output
//! wholesale. Labels are fixed German strings by design (no i18n).

use crate::comparator::{PanelOutcome, RouteSection};
use crate::model::Coordinates;
use crate::summary::Itinerary;
use crate::workdays::WorkdayEstimate;
use std::fmt::Write;

pub const PLACEHOLDER: &str = "--";

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

fn coords(value: &Option<Coordinates>) -> String {
    match value {
        Some(c) => format!("{:.5}, {:.5}", c.lat, c.lng),
        None => PLACEHOLDER.to_string(),
    }
}

/// The geocoded positions, the text counterpart of the original map
/// markers.
fn write_locations(out: &mut String, outcome: &PanelOutcome) {
    let _ = writeln!(out, "Standort Zuhause: {}", coords(&outcome.home));
    let _ = writeln!(out, "Standort Arbeit: {}", coords(&outcome.work));
}

fn write_verdict(out: &mut String, outcome: &PanelOutcome) {
    match &outcome.comparison {
        Some(cmp) => {
            let _ = writeln!(out, "Abzug: {}", cmp.verdict);
            if cmp.delta_minutes > 60 {
                let _ = writeln!(
                    out,
                    "Weil die Dauer des ÖV um {} min länger ist.",
                    cmp.delta_minutes
                );
            } else {
                let _ = writeln!(
                    out,
                    "Die Dauer des ÖV ist nur um {} min länger.",
                    cmp.delta_minutes
                );
            }
        }
        None => {
            let _ = writeln!(out, "Abzug: {}", PLACEHOLDER);
        }
    }
}

fn write_workdays(out: &mut String, workdays: &Option<WorkdayEstimate>) {
    match workdays {
        Some(est) => {
            let _ = writeln!(out, "Bei 220d p.a.: {} Tage", est.workdays_at_220);
            let _ = writeln!(out, "Bei 240d p.a.: {} Tage", est.workdays_at_240);
        }
        None => {
            let _ = writeln!(out, "Bei 220d p.a.: {}", PLACEHOLDER);
            let _ = writeln!(out, "Bei 240d p.a.: {}", PLACEHOLDER);
        }
    }
}

fn write_route_section(out: &mut String, label: &str, section: &Option<RouteSection>) {
    let _ = writeln!(out, "{}", label);
    match section {
        Some(s) => {
            let _ = writeln!(out, "{} Reisezeit: {}", label, s.duration_text);
            let _ = writeln!(out, "{} Reise in km: {}", label, s.distance_text);
            let _ = writeln!(
                out,
                "{} Reisezeit am Tag: {} mins",
                label,
                s.one_way_minutes * 2
            );
            let _ = writeln!(
                out,
                "{} Reise in km am Tag: {:.2} km",
                label,
                s.one_way_km * 2.0
            );
        }
        None => {
            let _ = writeln!(out, "{} Reisezeit: {} Minuten", label, PLACEHOLDER);
            let _ = writeln!(out, "{} Reise in km: {} km", label, PLACEHOLDER);
            let _ = writeln!(out, "{} Reisezeit am Tag: {} Minuten", label, PLACEHOLDER);
            let _ = writeln!(out, "{} Reise in km am Tag: {} km", label, PLACEHOLDER);
        }
    }
}

fn write_transit_times(out: &mut String, label: &str, itinerary: &Option<Itinerary>) {
    let _ = writeln!(out, "ÖV Zeiten {}", label);
    match itinerary {
        Some(it) => {
            let _ = writeln!(out, "Abreise: {}", opt(&it.departure));
            let _ = writeln!(out, "Ankunft: {}", opt(&it.arrival));
            let _ = writeln!(out, "Reisezeit: {} mins", it.travel_minutes);
            let _ = writeln!(out, "Warten: {} mins", it.waiting_minutes);
            let _ = writeln!(out, "Reisezeit + Warten: {} mins", it.travel_plus_waiting());
        }
        None => {
            let _ = writeln!(out, "Abreise: {} Uhr", PLACEHOLDER);
            let _ = writeln!(out, "Ankunft: {} Uhr", PLACEHOLDER);
            let _ = writeln!(out, "Reisezeit: {} Minuten", PLACEHOLDER);
            let _ = writeln!(out, "Warten: {} Minuten", PLACEHOLDER);
            let _ = writeln!(out, "Reisezeit + Warten: {} Minuten", PLACEHOLDER);
        }
    }
}

/// Renders one panel's complete output block.
pub fn render_panel(outcome: &PanelOutcome) -> String {
    let mut out = String::new();

    write_locations(&mut out, outcome);
    out.push('\n');
    write_verdict(&mut out, outcome);
    write_workdays(&mut out, &outcome.workdays);
    out.push('\n');

    write_route_section(&mut out, "Auto", &outcome.drive);
    out.push('\n');
    write_route_section(&mut out, "ÖV", &outcome.transit_overview);
    out.push('\n');
    write_transit_times(&mut out, "Arbeitsbeginn", &outcome.work_start);
    out.push('\n');
    write_transit_times(&mut out, "Arbeitsende", &outcome.work_end);

    out
}
