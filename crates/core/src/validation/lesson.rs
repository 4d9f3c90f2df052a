use std::collections::BTreeSet;

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::{
        availability::TimeWindow,
        lesson::{MAX_STUDENTS, MIN_STUDENTS, NewLesson, NewLessonRequest, Student, StudentRequest},
        swimming::{LessonType, SwimStyle},
    },
};

use super::{parse_styles, parse_timestamp};

fn invalid(reason: impl Into<String>) -> ScheduleError {
    ScheduleError::InvalidLesson(reason.into())
}

/// Validates a lesson payload, first failure wins.
///
/// Order: lesson type, specialties, timestamps, duration for the type,
/// roster size, then each student's type and preferences.
pub fn validate_lesson(request: &NewLessonRequest) -> ScheduleResult<NewLesson> {
    let lesson_type: LessonType = request.type_lesson.trim().parse().map_err(invalid)?;

    if request.specialties.is_empty() {
        return Err(invalid(format!(
            "Lesson must contain at least one specialty of: {}",
            SwimStyle::ALL.map(|s| s.as_str()).join(", ")
        )));
    }
    let specialties = parse_styles(&request.specialties).map_err(invalid)?;

    let start_time = parse_timestamp(&request.start_time).map_err(invalid)?;
    let end_time = parse_timestamp(&request.end_time).map_err(invalid)?;
    let window = TimeWindow::new(start_time, end_time);

    let expected = lesson_type.duration();
    if window.duration() != expected {
        return Err(invalid(format!(
            "A {} lesson must last exactly {} minutes.",
            lesson_type,
            expected.num_minutes()
        )));
    }

    if request.students.len() < MIN_STUDENTS || request.students.len() > MAX_STUDENTS {
        return Err(invalid(format!(
            "The number of students taking the lesson must be between {} to {}.",
            MIN_STUDENTS, MAX_STUDENTS
        )));
    }

    let students = request
        .students
        .iter()
        .map(|student| validate_student(student, lesson_type, &specialties))
        .collect::<ScheduleResult<Vec<_>>>()?;

    Ok(NewLesson {
        lesson_type,
        specialties,
        instructor_id: request.instructor_id,
        window,
        students,
    })
}

fn validate_student(
    raw: &StudentRequest,
    lesson_type: LessonType,
    specialties: &BTreeSet<SwimStyle>,
) -> ScheduleResult<Student> {
    let declared: LessonType = raw.lesson_type.trim().parse().map_err(invalid)?;
    if declared != lesson_type {
        return Err(invalid(format!(
            "Student {} registered for a {} lesson, not {}.",
            raw.name, declared, lesson_type
        )));
    }

    let preferences = parse_styles(&raw.preferences).map_err(invalid)?;
    if let Some(unmatched) = preferences.difference(specialties).next() {
        return Err(invalid(format!(
            "Student {} wants {} which this lesson does not teach.",
            raw.name, unmatched
        )));
    }

    Ok(Student {
        name: raw.name.clone(),
        preferences,
        lesson_type: declared,
    })
}
