//! Time-of-day comparison.
//!
//! Availability windows are stored as full timestamps, but only the
//! hour/minute/second part carries meaning: a window saved on some Tuesday
//! describes every Tuesday. Everything that asks "is this time of day inside
//! that window" goes through [`compare_time_of_day`] so calendar dates never
//! leak into the answer.

use std::cmp::Ordering;

use chrono::{DateTime, Timelike, Utc};

/// Orders two timestamps by hour, minute and second only.
pub fn compare_time_of_day(a: &DateTime<Utc>, b: &DateTime<Utc>) -> Ordering {
    (a.hour(), a.minute(), a.second()).cmp(&(b.hour(), b.minute(), b.second()))
}

/// `HH:MM` rendering used in error messages.
pub fn format_time_of_day(t: &DateTime<Utc>) -> String {
    t.format("%H:%M").to_string()
}
