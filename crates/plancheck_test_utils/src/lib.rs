//! # Plancheck Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Plan document fixtures
//! - Property-based testing strategies
//!
//! Fixtures are plain [`serde_json::Value`]s so they can be handed to the
//! checker exactly as a decoded file would be.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
