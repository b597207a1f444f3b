// File: ./tests/report_rendering.rs
//! Rendering of complete and degraded panel outcomes.

use arbeitsweg::comparator::PanelOutcome;
use arbeitsweg::model::{CommuteComparison, Coordinates};
use arbeitsweg::report::render_panel;
use arbeitsweg::summary::Itinerary;
use arbeitsweg::workdays::{DateRange, estimate};

#[test]
fn empty_outcome_renders_placeholders_only() {
    let output = render_panel(&PanelOutcome::default());
    assert!(output.contains("Standort Zuhause: --"));
    assert!(output.contains("Abzug: --"));
    assert!(output.contains("Bei 220d p.a.: --"));
    assert!(output.contains("Auto Reisezeit: -- Minuten"));
    assert!(output.contains("ÖV Zeiten Arbeitsbeginn"));
    assert!(output.contains("Abreise: -- Uhr"));
    // No stale numbers leak into a cleared panel.
    assert!(!output.contains("Tage"));
}

#[test]
fn resolved_coordinates_render() {
    let mut outcome = PanelOutcome::default();
    outcome.home = Some(Coordinates {
        lat: 47.47,
        lng: 8.31,
    });
    let output = render_panel(&outcome);
    assert!(output.contains("Standort Zuhause: 47.47000, 8.31000"));
    assert!(output.contains("Standort Arbeit: --"));
}

#[test]
fn verdict_and_difference_lines() {
    let mut outcome = PanelOutcome::default();
    outcome.comparison = Some(CommuteComparison::combine(Some(23), 160));
    let output = render_panel(&outcome);
    assert!(output.contains("Abzug: Der Abzug ist möglich."));
    assert!(output.contains("Weil die Dauer des ÖV um 114 min länger ist."));
}

#[test]
fn small_difference_gets_soft_phrasing() {
    let mut outcome = PanelOutcome::default();
    outcome.comparison = Some(CommuteComparison::combine(Some(30), 90));
    let output = render_panel(&outcome);
    assert!(output.contains("Abzug: Der Abzug ist nicht möglich."));
    assert!(output.contains("Die Dauer des ÖV ist nur um 30 min länger."));
}

#[test]
fn workday_lines_render_counts() {
    let mut outcome = PanelOutcome::default();
    let range = DateRange::parse("2025-01-01", "2025-12-31").unwrap();
    outcome.workdays = Some(estimate(&range, 2025));
    let output = render_panel(&outcome);
    assert!(output.contains("Bei 220d p.a.: 220 Tage"));
    assert!(output.contains("Bei 240d p.a.: 240 Tage"));
}

#[test]
fn transit_times_render_clock_values() {
    let mut outcome = PanelOutcome::default();
    outcome.work_start = Some(Itinerary {
        departure: Some("07:00 AM".to_string()),
        arrival: Some("08:00 AM".to_string()),
        travel_minutes: 60,
        waiting_minutes: 20,
    });
    let output = render_panel(&outcome);
    assert!(output.contains("Abreise: 07:00 AM"));
    assert!(output.contains("Ankunft: 08:00 AM"));
    assert!(output.contains("Reisezeit + Warten: 80 mins"));
}

#[test]
fn absent_timestamps_render_placeholder() {
    let mut outcome = PanelOutcome::default();
    outcome.work_end = Some(Itinerary {
        departure: None,
        arrival: None,
        travel_minutes: 45,
        waiting_minutes: 0,
    });
    let output = render_panel(&outcome);
    assert!(output.contains("Abreise: --"));
    assert!(output.contains("Reisezeit: 45 mins"));
}
