//! Error types for plan loading and checking.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`PlanError`].
pub type Result<T> = std::result::Result<T, PlanError>;

/// Top-level error type for everything that stops a plan from being checked.
///
/// Missing `rest_sec`/`rpe` fields are not errors; they are reported as
/// [`Violation`](crate::violation::Violation)s.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The plan file could not be read.
    #[error("Failed to read plan file '{}': {source}", path.display())]
    Read {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The plan file is not valid JSON.
    #[error("Failed to parse plan file '{}': {source}", path.display())]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A visited part of the document does not have the expected shape.
    #[error("Malformed plan at '{pointer}': expected {expected}")]
    Shape {
        /// JSON pointer of the offending value.
        pointer: String,
        /// What the checker expected to find there.
        expected: &'static str,
    },
}

impl PlanError {
    /// Build a [`PlanError::Shape`] for the value at `pointer`.
    pub(crate) fn shape(pointer: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            pointer: pointer.into(),
            expected,
        }
    }
}
