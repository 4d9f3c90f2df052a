use std::cmp::Ordering;

use crate::{
    clock::{compare_time_of_day, format_time_of_day},
    errors::{ScheduleError, ScheduleResult},
    models::{
        availability::{DAYS_IN_WEEK, DaySlot, TimeWindow, WeeklyAvailability},
        instructor::{NewInstructor, NewInstructorRequest, TimeWindowRequest},
    },
};

use super::{parse_styles, parse_timestamp};

fn invalid(reason: impl Into<String>) -> ScheduleError {
    ScheduleError::InvalidInstructor(reason.into())
}

/// Validates an instructor payload and normalises its week to seven slots.
///
/// Rules are checked in a fixed order and the first failure is reported:
///
/// 1. between 1 and 7 availability entries
/// 2. at least one specialty
/// 3. a non-blank name
/// 4. every available day parses and starts strictly before it ends
/// 5. at least one available day
/// 6. every specialty is a known swim style
///
/// Hours outside 0-23 cannot get past RFC 3339 parsing, so rule 4 covers them.
pub fn validate_instructor(request: &NewInstructorRequest) -> ScheduleResult<NewInstructor> {
    let entries = request.availabilities.len();
    if entries == 0 || entries > DAYS_IN_WEEK {
        return Err(invalid(
            "The availabilities for the instructor must be between 1 and 7 entries.",
        ));
    }

    if request.specialties.is_empty() {
        return Err(invalid("The instructor must have at least one specialty."));
    }

    let name = request.name.trim();
    if name.is_empty() {
        return Err(invalid("Instructor name cannot be empty."));
    }

    let slots = request
        .availabilities
        .iter()
        .map(|entry| match entry {
            None => Ok(DaySlot::Unavailable),
            Some(window) => parse_window(window).map(DaySlot::Available),
        })
        .collect::<ScheduleResult<Vec<_>>>()?;

    let availability = WeeklyAvailability::from_slots(slots);
    if !availability.has_any_availability() {
        return Err(invalid(
            "Instructor must have some availability during the week.",
        ));
    }

    let specialties = parse_styles(&request.specialties).map_err(invalid)?;

    Ok(NewInstructor {
        name: name.to_string(),
        specialties,
        availability,
    })
}

fn parse_window(raw: &TimeWindowRequest) -> ScheduleResult<TimeWindow> {
    let start_time = parse_timestamp(&raw.start_time).map_err(invalid)?;
    let end_time = parse_timestamp(&raw.end_time).map_err(invalid)?;

    if compare_time_of_day(&start_time, &end_time) != Ordering::Less {
        return Err(invalid(format!(
            "Start time ({}) cannot be greater or equal to end time ({}).",
            format_time_of_day(&start_time),
            format_time_of_day(&end_time)
        )));
    }

    Ok(TimeWindow::new(start_time, end_time))
}
