//! Human and machine readable check reports.

use std::io::{self, Write};

use plancheck_core::violation::Violation;
use serde::Serialize;

/// Header printed before the violation list.
pub const FAILURE_HEADER: &str = "Plan validation failed:";

/// Line printed when the plan has no violations.
pub const SUCCESS_LINE: &str =
    "Plan looks good: rest/rpe present for all straight and scheme segments.";

/// Outcome of checking one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ok: bool,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    path: String,
    message: String,
    #[serde(flatten)]
    violation: &'a Violation,
}

impl Report {
    /// Wrap the checker's findings.
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Findings in traversal order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether the plan has no violations.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Process exit code: 0 when passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            crate::EXIT_OK
        } else {
            crate::EXIT_FAILED
        }
    }

    /// Write the plain text report.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.passed() {
            return writeln!(out, "{SUCCESS_LINE}");
        }
        writeln!(out, "{FAILURE_HEADER}")?;
        for violation in &self.violations {
            writeln!(out, " - {violation}")?;
        }
        Ok(())
    }

    /// Write the report as a pretty-printed JSON object.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let report = JsonReport {
            ok: self.passed(),
            violations: self
                .violations
                .iter()
                .map(|violation| JsonViolation {
                    path: violation.pointer(),
                    message: violation.to_string(),
                    violation,
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)
    }
}
