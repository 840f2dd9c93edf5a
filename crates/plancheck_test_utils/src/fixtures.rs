//! Test fixtures and helpers.
//!
//! Small builders for plan documents, plus a few ready-made plans used
//! across unit, integration and CLI tests.

use serde_json::{json, Map, Value};

/// Wrap days into a plan document.
#[must_use]
pub fn plan(days: Vec<Value>) -> Value {
    json!({ "schedule": days })
}

/// Wrap segments into a day.
#[must_use]
pub fn day(segments: Vec<Value>) -> Value {
    json!({ "segments": segments })
}

/// A segment of the given type with no other fields.
#[must_use]
pub fn bare_segment(segment_type: &str) -> Value {
    json!({ "type": segment_type })
}

/// A segment of the given type carrying both `rest_sec` and `rpe`.
#[must_use]
pub fn complete_segment(segment_type: &str) -> Value {
    json!({
        "type": segment_type,
        "exercise": "BACK_SQUAT.BB",
        "reps": 5,
        "rest_sec": 180,
        "rpe": 8,
    })
}

/// A `scheme` segment with the given entries under `sets`.
#[must_use]
pub fn scheme(entries: Vec<Value>) -> Value {
    json!({ "type": "scheme", "exercise": "BENCH.BB", "sets": entries })
}

/// A scheme entry, optionally carrying `rest_sec` and `rpe`.
#[must_use]
pub fn entry(rest_sec: bool, rpe: bool) -> Value {
    let mut entry = Map::new();
    entry.insert("reps".to_string(), json!(5));
    if rest_sec {
        entry.insert("rest_sec".to_string(), json!(120));
    }
    if rpe {
        entry.insert("rpe".to_string(), json!(7.5));
    }
    Value::Object(entry)
}

/// A realistic four-day plan with every required field present.
#[must_use]
pub fn complete_plan() -> Value {
    json!({
        "name": "Upper/Lower 4x",
        "unit": "kg",
        "schedule": [
            {
                "day": 1,
                "label": "Lower A",
                "segments": [
                    { "type": "comment", "text": "Warm up 10 min" },
                    complete_segment("straight"),
                    complete_segment("percentage"),
                ],
            },
            {
                "day": 2,
                "label": "Upper A",
                "segments": [
                    scheme(vec![entry(true, true), entry(true, true), entry(true, true)]),
                    complete_segment("rpe"),
                ],
            },
            { "day": 3, "label": "Rest" },
            {
                "day": 4,
                "label": "Full",
                "segments": [
                    { "type": "interval", "work_sec": 30, "rest_sec": 30, "repeats": 8 },
                    complete_segment("straight"),
                ],
            },
        ],
    })
}

/// A plan with exactly three violations:
///
/// - `day 1 segment 1 (straight) missing rest_sec`
/// - `day 1 segment 1 (straight) missing rpe`
/// - `day 2 segment 2 (scheme) entry 1 missing rpe`
#[must_use]
pub fn broken_plan() -> Value {
    plan(vec![
        day(vec![bare_segment("straight"), bare_segment("warmup")]),
        day(vec![
            complete_segment("rpe"),
            scheme(vec![entry(true, false), entry(true, true)]),
        ]),
    ])
}
