use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::{compare_time_of_day, format_time_of_day};

pub const DAYS_IN_WEEK: usize = 7;

/// A start/end pair. For availability only the time of day matters; for
/// lessons the window is anchored to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self { start_time, end_time }
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Weekday of the window's start (UTC wall clock).
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Whether `inner` fits inside this window by time of day, dates ignored.
    /// An `inner` window that wraps past midnight never fits.
    pub fn contains_time_of_day(&self, inner: &TimeWindow) -> bool {
        compare_time_of_day(&inner.start_time, &inner.end_time) == Ordering::Less
            && compare_time_of_day(&inner.start_time, &self.start_time) != Ordering::Less
            && compare_time_of_day(&inner.end_time, &self.end_time) != Ordering::Greater
    }

    /// Half-open overlap: windows that only share an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    pub fn describe_time_of_day(&self) -> String {
        format!(
            "{} - {}",
            format_time_of_day(&self.start_time),
            format_time_of_day(&self.end_time)
        )
    }
}

/// One day of an instructor's week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DaySlot {
    Unavailable,
    Available(TimeWindow),
}

impl DaySlot {
    pub fn window(&self) -> Option<&TimeWindow> {
        match self {
            DaySlot::Unavailable => None,
            DaySlot::Available(window) => Some(window),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not available on {}", day_name(.0))]
pub struct NotAvailable(pub Weekday);

/// Seven day slots indexed Sunday (0) through Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability([DaySlot; DAYS_IN_WEEK]);

impl WeeklyAvailability {
    /// Builds a week from up to seven leading slots; missing trailing days
    /// are unavailable and anything past Saturday is dropped.
    pub fn from_slots(slots: impl IntoIterator<Item = DaySlot>) -> Self {
        let mut week = [DaySlot::Unavailable; DAYS_IN_WEEK];
        for (day, slot) in week.iter_mut().zip(slots) {
            *day = slot;
        }
        Self(week)
    }

    pub fn slot(&self, day: Weekday) -> &DaySlot {
        &self.0[day.num_days_from_sunday() as usize]
    }

    pub fn is_available(&self, day: Weekday) -> bool {
        matches!(self.slot(day), DaySlot::Available(_))
    }

    pub fn window_for(&self, day: Weekday) -> Result<&TimeWindow, NotAvailable> {
        self.slot(day).window().ok_or(NotAvailable(day))
    }

    pub fn has_any_availability(&self) -> bool {
        self.0.iter().any(|slot| matches!(slot, DaySlot::Available(_)))
    }

    pub fn slots(&self) -> &[DaySlot; DAYS_IN_WEEK] {
        &self.0
    }
}

/// Maps a 0-6 index (Sunday first) to a weekday.
pub fn weekday_from_index(index: i64) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn day_name(day: &Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
