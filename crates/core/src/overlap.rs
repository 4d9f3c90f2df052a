//! Conflict detection between a candidate lesson and an instructor's
//! existing lessons.
//!
//! Any overlap between two lessons of the same instructor is a conflict,
//! whatever their types. Windows are half-open, so a lesson ending at 10:45
//! and another starting at 10:45 coexist.

use uuid::Uuid;

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::{availability::TimeWindow, lesson::Lesson},
};

/// Fails with `SchedulingConflict` naming the first existing lesson that
/// overlaps `candidate`. `ignore` skips a lesson by id (the one being updated).
pub fn ensure_no_conflict<'a>(
    candidate: &TimeWindow,
    existing: impl IntoIterator<Item = &'a Lesson>,
    ignore: Option<Uuid>,
) -> ScheduleResult<()> {
    match find_conflict(candidate, existing, ignore) {
        Some(lesson) => Err(ScheduleError::SchedulingConflict { lesson_id: lesson.id }),
        None => Ok(()),
    }
}

pub fn find_conflict<'a>(
    candidate: &TimeWindow,
    existing: impl IntoIterator<Item = &'a Lesson>,
    ignore: Option<Uuid>,
) -> Option<&'a Lesson> {
    existing
        .into_iter()
        .filter(|lesson| Some(lesson.id) != ignore)
        .find(|lesson| candidate.overlaps(&lesson.window))
}
