//! # Lesson scheduling
//!
//! `LessonService` is the use-case controller for creating and updating
//! lessons. Every write runs the same pipeline, stopping at the first
//! failure:
//!
//! 1. weekday in 0-6 (create only; updates derive it from the lesson start)
//! 2. lesson payload validation
//! 3. instructor lookup
//! 4. instructor teaches every specialty of the lesson
//! 5. instructor is available on the weekday
//! 6. lesson fits inside that day's window by time of day
//! 7. no overlap with the instructor's other lessons on that weekday
//!
//! Only then is storage asked to persist. The conflict check here works on a
//! snapshot; the lesson store enforces the same rule at write time so that
//! concurrent writers cannot both slip through.

use std::sync::Arc;

use chrono::{DateTime, Utc, Weekday};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::{
        availability::{day_name, weekday_from_index},
        lesson::{Lesson, NewLesson, NewLessonRequest, UpdateLessonRequest},
    },
    overlap::ensure_no_conflict,
    repository::{InstructorRepository, LessonRepository},
    validation::validate_lesson,
};

pub struct LessonService {
    instructors: Arc<dyn InstructorRepository>,
    lessons: Arc<dyn LessonRepository>,
}

impl LessonService {
    pub fn new(
        instructors: Arc<dyn InstructorRepository>,
        lessons: Arc<dyn LessonRepository>,
    ) -> Self {
        Self { instructors, lessons }
    }

    /// Validates and persists a new lesson taught on `weekday` (0 = Sunday).
    pub async fn create_lesson(
        &self,
        request: &NewLessonRequest,
        weekday: i64,
    ) -> ScheduleResult<Lesson> {
        let day = weekday_from_index(weekday).ok_or_else(|| {
            ScheduleError::InvalidRequest(
                "Invalid day of the week. Must be between 0 and 6.".to_string(),
            )
        })?;

        let lesson = validate_lesson(request).inspect_err(log_rejection)?;
        self.check_schedule(&lesson, day, None)
            .await
            .inspect_err(log_rejection)?;

        let created = self.lessons.create(lesson).await?;
        info!(
            "Lesson created: id={}, instructor={}, start={}",
            created.id, created.instructor_id, created.window.start_time
        );
        Ok(created)
    }

    /// Replaces a lesson after re-running the scheduling pipeline against
    /// the weekday of the new start time.
    pub async fn update_lesson(
        &self,
        id: Uuid,
        request: &UpdateLessonRequest,
    ) -> ScheduleResult<Lesson> {
        self.get_lesson(id).await?;

        let lesson = validate_lesson(request).inspect_err(log_rejection)?;
        let day = lesson.window.weekday();
        self.check_schedule(&lesson, day, Some(id))
            .await
            .inspect_err(log_rejection)?;

        let updated = self
            .lessons
            .replace(id, lesson)
            .await?
            .ok_or(ScheduleError::LessonNotFound(id))?;
        info!("Lesson updated: id={}", updated.id);
        Ok(updated)
    }

    pub async fn get_lesson(&self, id: Uuid) -> ScheduleResult<Lesson> {
        self.lessons
            .find_by_id(id)
            .await?
            .ok_or(ScheduleError::LessonNotFound(id))
    }

    pub async fn lessons_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ScheduleResult<Vec<Lesson>> {
        if start > end {
            return Err(ScheduleError::InvalidRequest(
                "Invalid range: start must not be after end.".to_string(),
            ));
        }
        self.lessons.find_by_range(start, end).await
    }

    pub async fn delete_lesson(&self, id: Uuid) -> ScheduleResult<bool> {
        self.lessons.delete_by_id(id).await
    }

    pub async fn delete_all_lessons(&self) -> ScheduleResult<bool> {
        self.lessons.delete_all().await
    }

    async fn check_schedule(
        &self,
        lesson: &NewLesson,
        day: Weekday,
        ignore: Option<Uuid>,
    ) -> ScheduleResult<()> {
        let instructor = self
            .instructors
            .find_by_id(lesson.instructor_id)
            .await?
            .ok_or(ScheduleError::InstructorNotFound(lesson.instructor_id))?;

        if !instructor.teaches_all(&lesson.specialties) {
            let missing = lesson
                .specialties
                .difference(&instructor.specialties)
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ScheduleError::SpecialtyMismatch(format!(
                "The instructor {} is not teaching {}",
                instructor.name, missing
            )));
        }

        let available = instructor.availability.window_for(day).map_err(|e| {
            ScheduleError::InstructorUnavailable(format!("The instructor {} is {}", instructor.name, e))
        })?;

        if !available.contains_time_of_day(&lesson.window) {
            return Err(ScheduleError::OutsideAvailability(format!(
                "The instructor {} is available only for {} on {}",
                instructor.name,
                available.describe_time_of_day(),
                day_name(&day)
            )));
        }

        let existing = self
            .instructors
            .find_lessons_for_instructor(instructor.id)
            .await?;
        debug!(
            "Checking {} existing lessons of instructor {} for conflicts",
            existing.len(),
            instructor.id
        );
        ensure_no_conflict(
            &lesson.window,
            existing.iter().filter(|l| l.window.weekday() == day),
            ignore,
        )
    }
}

fn log_rejection(err: &ScheduleError) {
    if err.is_rejection() {
        warn!("Lesson rejected: {}", err);
    }
}
