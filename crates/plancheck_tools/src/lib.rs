//! # Plancheck Tools
//!
//! Command-line tooling around [`plancheck_core`]:
//! - Plan file loading
//! - Text and JSON reports
//! - Argument handling and exit codes

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod cli;
pub mod load;
pub mod report;

/// Exit code for a plan with no violations.
pub const EXIT_OK: i32 = 0;
/// Exit code for a plan with violations, or one that could not be loaded.
pub const EXIT_FAILED: i32 = 1;
/// Exit code for bad command-line arguments.
pub const EXIT_USAGE: i32 = 2;
