//! Structural and semantic checks run before anything is persisted.
//!
//! Validators take raw request payloads and either hand back typed records
//! or fail with the first rule the payload breaks. Nothing here touches
//! storage.

pub mod instructor;
pub mod lesson;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::swimming::SwimStyle;

pub use instructor::validate_instructor;
pub use lesson::validate_lesson;

/// Parses an RFC 3339 timestamp and normalises it to UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("Invalid date format ({}): {}", raw, e))
}

pub fn parse_styles<S: AsRef<str>>(raw: &[S]) -> Result<BTreeSet<SwimStyle>, String> {
    raw.iter().map(|s| s.as_ref().trim().parse()).collect()
}
