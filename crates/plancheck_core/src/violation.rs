//! A single missing-field finding.

use std::fmt;

use serde::Serialize;

use crate::segment::RequiredField;

/// One required field that is absent from a segment or scheme entry.
///
/// Indices are zero-based positions in the document. [`fmt::Display`]
/// renders them one-based:
///
/// ```
/// use plancheck_core::segment::RequiredField;
/// use plancheck_core::violation::Violation;
///
/// let v = Violation::on_entry(0, 2, "scheme", 1, RequiredField::Rpe);
/// assert_eq!(v.to_string(), "day 1 segment 3 (scheme) entry 2 missing rpe");
/// assert_eq!(v.pointer(), "/schedule/0/segments/2/sets/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    /// Index of the day in `schedule`.
    pub day: usize,
    /// Index of the segment in the day's `segments`.
    pub segment: usize,
    /// The segment's `type` tag as written in the document.
    pub segment_type: String,
    /// Index of the entry in `sets`, for scheme segments only.
    pub entry: Option<usize>,
    /// The field that is missing.
    pub field: RequiredField,
}

impl Violation {
    /// A field missing directly on a segment.
    #[must_use]
    pub fn on_segment(
        day: usize,
        segment: usize,
        segment_type: impl Into<String>,
        field: RequiredField,
    ) -> Self {
        Self {
            day,
            segment,
            segment_type: segment_type.into(),
            entry: None,
            field,
        }
    }

    /// A field missing on one entry of a scheme segment.
    #[must_use]
    pub fn on_entry(
        day: usize,
        segment: usize,
        segment_type: impl Into<String>,
        entry: usize,
        field: RequiredField,
    ) -> Self {
        Self {
            day,
            segment,
            segment_type: segment_type.into(),
            entry: Some(entry),
            field,
        }
    }

    /// JSON pointer of the mapping that lacks the field.
    #[must_use]
    pub fn pointer(&self) -> String {
        let base = format!("/schedule/{}/segments/{}", self.day, self.segment);
        match self.entry {
            Some(entry) => format!("{base}/sets/{entry}"),
            None => base,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {} segment {} ({})",
            self.day + 1,
            self.segment + 1,
            self.segment_type
        )?;
        if let Some(entry) = self.entry {
            write!(f, " entry {}", entry + 1)?;
        }
        write!(f, " missing {}", self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_message_is_one_based() {
        let v = Violation::on_segment(0, 0, "straight", RequiredField::RestSec);
        assert_eq!(v.to_string(), "day 1 segment 1 (straight) missing rest_sec");
    }

    #[test]
    fn test_entry_clause_only_for_entries() {
        let seg = Violation::on_segment(3, 1, "percentage", RequiredField::Rpe);
        let entry = Violation::on_entry(3, 1, "scheme", 4, RequiredField::Rpe);

        assert!(!seg.to_string().contains("entry"));
        assert_eq!(
            entry.to_string(),
            "day 4 segment 2 (scheme) entry 5 missing rpe"
        );
    }

    #[test]
    fn test_pointer_uses_zero_based_indices() {
        let v = Violation::on_segment(1, 2, "rpe", RequiredField::Rpe);
        assert_eq!(v.pointer(), "/schedule/1/segments/2");
    }

    #[test]
    fn test_serializes_field_by_key() {
        let v = Violation::on_entry(0, 0, "scheme", 0, RequiredField::RestSec);
        let json = serde_json::to_value(&v).unwrap();

        assert_eq!(json["field"], "rest_sec");
        assert_eq!(json["entry"], 0);
        assert_eq!(json["segment_type"], "scheme");
    }
}
