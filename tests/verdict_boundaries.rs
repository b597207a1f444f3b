// File: ./tests/verdict_boundaries.rs
//! Threshold ladder and combination arithmetic.

use arbeitsweg::model::{CommuteComparison, Verdict};
use strum::IntoEnumIterator;

#[test]
fn threshold_ladder() {
    assert_eq!(Verdict::classify(91), Verdict::Eligible);
    assert_eq!(Verdict::classify(90), Verdict::LikelyEligible);
    assert_eq!(Verdict::classify(61), Verdict::LikelyEligible);
    assert_eq!(Verdict::classify(60), Verdict::NotEligible);
    assert_eq!(Verdict::classify(0), Verdict::NotEligible);
    assert_eq!(Verdict::classify(-30), Verdict::NotEligible);
}

#[test]
fn german_labels() {
    assert_eq!(Verdict::Eligible.to_string(), "Der Abzug ist möglich.");
    assert_eq!(
        Verdict::NotEligible.to_string(),
        "Der Abzug ist nicht möglich."
    );
}

#[test]
fn every_verdict_has_a_label() {
    for verdict in Verdict::iter() {
        assert!(verdict.to_string().starts_with("Der Abzug"));
    }
}

#[test]
fn combine_doubles_car_leg() {
    let cmp = CommuteComparison::combine(Some(23), 150);
    assert_eq!(cmp.car_minutes_round_trip, 46);
    assert_eq!(cmp.transit_minutes_round_trip, 150);
    assert_eq!(cmp.delta_minutes, 104);
    assert_eq!(cmp.verdict, Verdict::Eligible);
}

#[test]
fn missing_car_operand_counts_zero() {
    let cmp = CommuteComparison::combine(None, 50);
    assert_eq!(cmp.car_minutes_round_trip, 0);
    assert_eq!(cmp.delta_minutes, 50);
    assert_eq!(cmp.verdict, Verdict::NotEligible);
}

#[test]
fn missing_transit_operands_count_zero() {
    let cmp = CommuteComparison::combine(Some(30), 0);
    assert_eq!(cmp.delta_minutes, -60);
    assert_eq!(cmp.verdict, Verdict::NotEligible);
}
