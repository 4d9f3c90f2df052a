pub mod instructor;
pub mod lesson;

use swimsync_core::errors::ScheduleError;

/// Reads a day-of-week query parameter (0 = Sunday). Range checks stay with
/// the services; this only rejects missing or non-numeric values.
pub(crate) fn day_param(raw: Option<&str>, name: &str) -> Result<i64, ScheduleError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ScheduleError::InvalidRequest(format!("Missing query parameter: {name}")))?;

    raw.parse().map_err(|_| {
        ScheduleError::InvalidRequest(format!(
            "Invalid {name}: {raw}. Must be a number between 0 and 6."
        ))
    })
}
