//! # Plancheck Core
//!
//! Field checker for workout plan documents.
//!
//! This crate contains **only** the checking logic:
//! - No file IO
//! - No printing
//! - No mutation of the input document
//!
//! It takes an already decoded [`serde_json::Value`] and returns the ordered
//! list of segments and scheme entries that lack `rest_sec` or `rpe`.
//!
//! ## Crate Structure
//!
//! - [`checker`] - Document walk and per-kind dispatch
//! - [`segment`] - Segment kinds and their required fields
//! - [`violation`] - Missing-field findings
//! - [`error`] - Error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod checker;
pub mod error;
pub mod segment;
pub mod violation;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::checker::{check_plan, PlanFieldChecker};
    pub use crate::error::{PlanError, Result};
    pub use crate::segment::{RequiredField, Requirement, SegmentKind};
    pub use crate::violation::Violation;
}
