//! Segment kinds and the fields each kind must carry.

use std::fmt;

use serde::Serialize;

/// Kind of a training segment, parsed from its `type` tag.
///
/// Only the kinds that carry rest/effort metadata are named. Every other
/// tag, including a missing or non-string one, is [`SegmentKind::Unrecognized`]
/// and is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Fixed sets x reps.
    Straight,
    /// Load chosen by target RPE.
    Rpe,
    /// Load chosen as a percentage of a max.
    Percentage,
    /// Explicit list of sets under `sets`.
    Scheme,
    /// Anything else (warmups, comments, intervals, ...).
    Unrecognized,
}

/// Where a segment kind expects its required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Directly on the segment mapping.
    OnSegment,
    /// On every entry of the segment's `sets` sequence.
    PerEntry,
    /// Nowhere; the segment is skipped.
    None,
}

impl SegmentKind {
    /// Parse a `type` tag. Unknown tags map to [`SegmentKind::Unrecognized`].
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("straight") => Self::Straight,
            Some("rpe") => Self::Rpe,
            Some("percentage") => Self::Percentage,
            Some("scheme") => Self::Scheme,
            _ => Self::Unrecognized,
        }
    }

    /// The required-field contract for this kind.
    #[must_use]
    pub const fn requirement(self) -> Requirement {
        match self {
            Self::Straight | Self::Rpe | Self::Percentage => Requirement::OnSegment,
            Self::Scheme => Requirement::PerEntry,
            Self::Unrecognized => Requirement::None,
        }
    }
}

/// A field that checked segments and scheme entries must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// Rest after the work, in seconds.
    RestSec,
    /// Rate of perceived exertion.
    Rpe,
}

impl RequiredField {
    /// All required fields, in check order.
    pub const ALL: [Self; 2] = [Self::RestSec, Self::Rpe];

    /// Key of this field in the plan document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::RestSec => "rest_sec",
            Self::Rpe => "rpe",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
