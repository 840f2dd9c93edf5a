//! Property-based testing strategies.
//!
//! [`arb_plan`] generates a [`PlanSpec`]: a description of which segments
//! and scheme entries carry `rest_sec`/`rpe`. The spec renders itself to a
//! JSON document and independently computes the messages a correct checker
//! must produce for it.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Segment tags that carry requirements directly on the segment.
pub const DIRECT_TAGS: [&str; 3] = ["straight", "rpe", "percentage"];

/// Tags the checker never inspects.
pub const SKIPPED_TAGS: [&str; 5] = ["warmup", "comment", "interval", "amrap", "Straight"];

/// Presence of the two required fields on one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    /// Whether `rest_sec` is present, and with which value.
    pub rest_sec: Option<FieldValue>,
    /// Whether `rpe` is present, and with which value.
    pub rpe: Option<FieldValue>,
}

/// Values a present field may hold. All of them count as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// A typical number.
    Number,
    /// `0`.
    Zero,
    /// `null`.
    Null,
    /// `false`.
    False,
    /// `""`.
    Empty,
}

impl FieldValue {
    fn to_json(self) -> Value {
        match self {
            Self::Number => json!(90),
            Self::Zero => json!(0),
            Self::Null => Value::Null,
            Self::False => json!(false),
            Self::Empty => json!(""),
        }
    }
}

impl Fields {
    fn write_into(self, map: &mut Map<String, Value>) {
        if let Some(value) = self.rest_sec {
            map.insert("rest_sec".to_string(), value.to_json());
        }
        if let Some(value) = self.rpe {
            map.insert("rpe".to_string(), value.to_json());
        }
    }

    fn missing(self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.rest_sec.is_none() {
            missing.push("rest_sec");
        }
        if self.rpe.is_none() {
            missing.push("rpe");
        }
        missing
    }
}

/// One generated segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentSpec {
    /// `straight`, `rpe` or `percentage` segment.
    Direct {
        /// The segment tag.
        tag: &'static str,
        /// Fields on the segment.
        fields: Fields,
    },
    /// `scheme` segment. `None` entries means no `sets` key at all.
    Scheme {
        /// Fields copied onto the segment itself, which must not count.
        own: Fields,
        /// Fields on each entry.
        entries: Option<Vec<Fields>>,
    },
    /// Segment the checker must ignore. `None` tag means no `type` key.
    Skipped {
        /// The segment tag.
        tag: Option<&'static str>,
        /// Fields on the segment.
        fields: Fields,
    },
}

impl SegmentSpec {
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        match self {
            Self::Direct { tag, fields } => {
                map.insert("type".to_string(), json!(tag));
                fields.write_into(&mut map);
            }
            Self::Scheme { own, entries } => {
                map.insert("type".to_string(), json!("scheme"));
                own.write_into(&mut map);
                if let Some(entries) = entries {
                    let sets = entries
                        .iter()
                        .map(|fields| {
                            let mut entry = Map::new();
                            entry.insert("reps".to_string(), json!(3));
                            fields.write_into(&mut entry);
                            Value::Object(entry)
                        })
                        .collect();
                    map.insert("sets".to_string(), Value::Array(sets));
                }
            }
            Self::Skipped { tag, fields } => {
                if let Some(tag) = tag {
                    map.insert("type".to_string(), json!(tag));
                }
                fields.write_into(&mut map);
            }
        }
        Value::Object(map)
    }
}

/// A generated plan: days of segments.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSpec {
    /// Days in order. `None` means the day has no `segments` key.
    pub days: Vec<Option<Vec<SegmentSpec>>>,
}

impl PlanSpec {
    /// Render the plan as a JSON document.
    ///
    /// An empty plan is rendered without a `schedule` key.
    #[must_use]
    pub fn to_json(&self) -> Value {
        if self.days.is_empty() {
            return json!({ "name": "generated" });
        }
        let days: Vec<Value> = self
            .days
            .iter()
            .map(|day| match day {
                Some(segments) => {
                    json!({ "segments": segments.iter().map(SegmentSpec::to_json).collect::<Vec<_>>() })
                }
                None => json!({ "label": "rest day" }),
            })
            .collect();
        json!({ "schedule": days })
    }

    /// The messages a correct checker reports for this plan, in order.
    #[must_use]
    pub fn expected_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        for (d, day) in self.days.iter().enumerate() {
            for (s, segment) in day.iter().flatten().enumerate() {
                match segment {
                    SegmentSpec::Direct { tag, fields } => {
                        for field in fields.missing() {
                            messages.push(format!(
                                "day {} segment {} ({tag}) missing {field}",
                                d + 1,
                                s + 1
                            ));
                        }
                    }
                    SegmentSpec::Scheme { entries, .. } => {
                        for (e, fields) in entries.iter().flatten().enumerate() {
                            for field in fields.missing() {
                                messages.push(format!(
                                    "day {} segment {} (scheme) entry {} missing {field}",
                                    d + 1,
                                    s + 1,
                                    e + 1
                                ));
                            }
                        }
                    }
                    SegmentSpec::Skipped { .. } => {}
                }
            }
        }
        messages
    }
}

/// Strategy for a present field value.
pub fn arb_field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        4 => Just(FieldValue::Number),
        1 => Just(FieldValue::Zero),
        1 => Just(FieldValue::Null),
        1 => Just(FieldValue::False),
        1 => Just(FieldValue::Empty),
    ]
}

/// Strategy for field presence, with roughly half of the fields absent.
pub fn arb_fields() -> impl Strategy<Value = Fields> {
    (option::of(arb_field_value()), option::of(arb_field_value()))
        .prop_map(|(rest_sec, rpe)| Fields { rest_sec, rpe })
}

/// Strategy for fields that are always both present.
pub fn arb_complete_fields() -> impl Strategy<Value = Fields> {
    (arb_field_value(), arb_field_value()).prop_map(|(rest_sec, rpe)| Fields {
        rest_sec: Some(rest_sec),
        rpe: Some(rpe),
    })
}

/// Strategy for a segment whose checked fields come from `fields`.
pub fn arb_segment_with(fields: BoxedStrategy<Fields>) -> impl Strategy<Value = SegmentSpec> {
    prop_oneof![
        (prop::sample::select(DIRECT_TAGS.to_vec()), fields.clone())
            .prop_map(|(tag, fields)| SegmentSpec::Direct { tag, fields }),
        (arb_fields(), option::of(vec(fields, 0..4)))
            .prop_map(|(own, entries)| SegmentSpec::Scheme { own, entries }),
        (
            option::of(prop::sample::select(SKIPPED_TAGS.to_vec())),
            arb_fields()
        )
            .prop_map(|(tag, fields)| SegmentSpec::Skipped { tag, fields }),
    ]
}

/// Strategy for a plan built from segments produced by `segment`.
pub fn arb_plan_with<S>(segment: S) -> impl Strategy<Value = PlanSpec>
where
    S: Strategy<Value = SegmentSpec> + 'static,
{
    vec(option::weighted(0.9, vec(segment, 0..5)), 0..5).prop_map(|days| PlanSpec { days })
}

/// Strategy for arbitrary plans with any mix of missing fields.
pub fn arb_plan() -> impl Strategy<Value = PlanSpec> {
    arb_plan_with(arb_segment_with(arb_fields().boxed()))
}

/// Strategy for plans where every checked item is complete.
pub fn arb_complete_plan() -> impl Strategy<Value = PlanSpec> {
    arb_plan_with(arb_segment_with(arb_complete_fields().boxed()))
}

/// Strategy for plans containing only segments the checker skips.
pub fn arb_skipped_only_plan() -> impl Strategy<Value = PlanSpec> {
    let skipped = (
        option::of(prop::sample::select(SKIPPED_TAGS.to_vec())),
        arb_fields(),
    )
        .prop_map(|(tag, fields)| SegmentSpec::Skipped { tag, fields });
    arb_plan_with(skipped)
}
