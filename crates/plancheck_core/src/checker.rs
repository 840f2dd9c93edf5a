//! The plan field checker.
//!
//! Walks `schedule -> segments -> sets` in document order and records one
//! [`Violation`] per required field that is structurally absent. Checking
//! never stops at the first finding.
//!
//! Field presence is existence-only: `"rpe": null` satisfies the check.
//! Absent `schedule`, `segments` or `sets` keys are empty sequences. A value
//! of the wrong shape on a visited path is a [`PlanError::Shape`], and no
//! partial result is returned.

use serde_json::{Map, Value};

use crate::error::{PlanError, Result};
use crate::segment::{RequiredField, Requirement, SegmentKind};
use crate::violation::Violation;

type Object = Map<String, Value>;

/// Checks that rest/effort metadata is present wherever a segment kind
/// requires it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanFieldChecker;

impl PlanFieldChecker {
    /// Create a checker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check a decoded plan document.
    ///
    /// Returns every violation, ordered by day, segment, entry and then
    /// field (`rest_sec` before `rpe`).
    ///
    /// # Example
    ///
    /// ```
    /// use plancheck_core::checker::PlanFieldChecker;
    /// use serde_json::json;
    ///
    /// let plan = json!({"schedule": [{"segments": [{"type": "straight", "rpe": 8}]}]});
    /// let violations = PlanFieldChecker::new().check(&plan).unwrap();
    ///
    /// assert_eq!(violations.len(), 1);
    /// assert_eq!(violations[0].to_string(), "day 1 segment 1 (straight) missing rest_sec");
    /// ```
    pub fn check(&self, plan: &Value) -> Result<Vec<Violation>> {
        let plan = as_object(plan, "")?;
        let mut violations = Vec::new();

        for (day_index, day) in sequence(plan, "schedule", "")?.iter().enumerate() {
            let day_pointer = format!("/schedule/{day_index}");
            let day = as_object(day, &day_pointer)?;

            for (segment_index, segment) in sequence(day, "segments", &day_pointer)?
                .iter()
                .enumerate()
            {
                let segment_pointer = format!("{day_pointer}/segments/{segment_index}");
                let segment = as_object(segment, &segment_pointer)?;
                Self::check_segment(
                    day_index,
                    segment_index,
                    segment,
                    &segment_pointer,
                    &mut violations,
                )?;
            }
        }

        tracing::debug!(violations = violations.len(), "Plan field check complete");
        Ok(violations)
    }

    fn check_segment(
        day: usize,
        index: usize,
        segment: &Object,
        pointer: &str,
        violations: &mut Vec<Violation>,
    ) -> Result<()> {
        let tag = segment.get("type").and_then(Value::as_str);
        let segment_type = tag.unwrap_or_default();

        match SegmentKind::from_tag(tag).requirement() {
            Requirement::OnSegment => {
                violations.extend(
                    missing_fields(segment)
                        .map(|field| Violation::on_segment(day, index, segment_type, field)),
                );
            }
            Requirement::PerEntry => {
                for (entry_index, entry) in sequence(segment, "sets", pointer)?.iter().enumerate()
                {
                    let entry = as_object(entry, &format!("{pointer}/sets/{entry_index}"))?;
                    violations.extend(missing_fields(entry).map(|field| {
                        Violation::on_entry(day, index, segment_type, entry_index, field)
                    }));
                }
            }
            Requirement::None => {
                tracing::debug!(
                    pointer,
                    segment_type = ?segment.get("type"),
                    "Skipping segment without rest/rpe requirements"
                );
            }
        }

        Ok(())
    }
}

/// Check a decoded plan document with a default [`PlanFieldChecker`].
pub fn check_plan(plan: &Value) -> Result<Vec<Violation>> {
    PlanFieldChecker::new().check(plan)
}

fn missing_fields(item: &Object) -> impl Iterator<Item = RequiredField> + '_ {
    RequiredField::ALL
        .into_iter()
        .filter(move |field| !item.contains_key(field.key()))
}

fn as_object<'a>(value: &'a Value, pointer: &str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| PlanError::shape(pointer, "an object"))
}

fn sequence<'a>(parent: &'a Object, key: &str, pointer: &str) -> Result<&'a [Value]> {
    match parent.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(PlanError::shape(format!("{pointer}/{key}"), "an array")),
    }
}
