//! Plan document loading.

use std::path::Path;

use plancheck_core::error::{PlanError, Result};
use serde_json::Value;

/// Read and decode a plan file.
///
/// Decoding is all-or-nothing; a file that is not valid JSON never reaches
/// the checker.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Read plan file");

    serde_json::from_str(&contents).map_err(|source| PlanError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode plan text that is already in memory.
pub fn parse_plan(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| PlanError::Parse {
        path: "<memory>".into(),
        source,
    })
}
