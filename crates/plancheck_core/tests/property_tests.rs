//! Property-based tests for the plan field checker.
//!
//! Generated plans carry their own expected messages, computed without the
//! checker, so each property compares against an independent oracle.

use plancheck_core::prelude::*;
use plancheck_test_utils::fixtures;
use plancheck_test_utils::proptest::prelude::*;
use plancheck_test_utils::strategies::{arb_complete_plan, arb_plan, arb_skipped_only_plan};

fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}

proptest! {
    /// Every absent field on a checked item is reported, in document order.
    #[test]
    fn prop_reports_every_missing_field_in_order(spec in arb_plan()) {
        let violations = check_plan(&spec.to_json()).unwrap();
        prop_assert_eq!(messages(&violations), spec.expected_messages());
    }

    /// Complete plans pass regardless of the values the fields hold.
    #[test]
    fn prop_complete_plans_have_no_violations(spec in arb_complete_plan()) {
        let violations = check_plan(&spec.to_json()).unwrap();
        prop_assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    /// Segments with unknown or missing types never contribute.
    #[test]
    fn prop_skipped_segments_never_report(spec in arb_skipped_only_plan()) {
        let violations = check_plan(&spec.to_json()).unwrap();
        prop_assert!(violations.is_empty());
    }

    /// Checking the same document twice gives the same result.
    #[test]
    fn prop_check_is_idempotent(spec in arb_plan()) {
        let plan = spec.to_json();
        let checker = PlanFieldChecker::new();
        let first = checker.check(&plan).unwrap();
        let second = checker.check(&plan).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Violations come out sorted by position, rest_sec before rpe.
    #[test]
    fn prop_violations_sorted_by_position(spec in arb_plan()) {
        let violations = check_plan(&spec.to_json()).unwrap();
        let keys: Vec<_> = violations
            .iter()
            .map(|v| (v.day, v.segment, v.entry, v.field == RequiredField::Rpe))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }
}

#[test]
fn test_complete_fixture_passes() {
    assert!(check_plan(&fixtures::complete_plan()).unwrap().is_empty());
}

#[test]
fn test_broken_fixture_reports_three() {
    let violations = check_plan(&fixtures::broken_plan()).unwrap();
    assert_eq!(
        messages(&violations),
        vec![
            "day 1 segment 1 (straight) missing rest_sec",
            "day 1 segment 1 (straight) missing rpe",
            "day 2 segment 2 (scheme) entry 1 missing rpe",
        ]
    );
}

#[test]
fn test_decoded_text_is_checked() {
    let text = r#"{
        "schedule": [
            {"segments": [{"type": "scheme", "sets": [{"rest_sec": 90}, {"rest_sec": 90, "rpe": 8}]}]}
        ]
    }"#;
    let plan: serde_json::Value = serde_json::from_str(text).unwrap();

    assert_eq!(
        messages(&check_plan(&plan).unwrap()),
        vec!["day 1 segment 1 (scheme) entry 1 missing rpe"]
    );
}
