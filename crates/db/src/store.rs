//! Postgres-backed implementation of the core repository traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Report;
use swimsync_core::{
    errors::{ScheduleError, ScheduleResult},
    models::{
        instructor::{Instructor, NewInstructor},
        lesson::{Lesson, NewLesson},
        swimming::SwimStyle,
    },
    repository::{InstructorRepository, LessonRepository},
};
use uuid::Uuid;

use crate::{
    DbPool,
    models::DbLesson,
    repositories::{instructor, lesson},
};

/// SQLSTATE raised by the `lessons_no_overlap` exclusion constraint.
const EXCLUSION_VIOLATION: &str = "23P01";
/// SQLSTATE raised when a lesson references a missing instructor.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Translate a failed lesson write into the matching domain error.
    async fn lesson_write_error(
        &self,
        report: Report,
        new: &NewLesson,
        exclude: Option<Uuid>,
    ) -> ScheduleError {
        match sqlstate(&report).as_deref() {
            Some(EXCLUSION_VIOLATION) => {
                tracing::debug!(
                    "Overlap constraint rejected lesson for instructor {}",
                    new.instructor_id
                );
                let conflicting = lesson::find_overlapping_lesson(
                    &self.pool,
                    new.instructor_id,
                    new.window.start_time,
                    new.window.end_time,
                    exclude,
                )
                .await;
                match conflicting {
                    Ok(blocking) => conflict_error(new.instructor_id, blocking),
                    Err(e) => ScheduleError::Database(e),
                }
            }
            Some(FOREIGN_KEY_VIOLATION) => ScheduleError::InstructorNotFound(new.instructor_id),
            _ => ScheduleError::Database(report),
        }
    }
}

/// The blocking row may be gone by the time it is looked up; the write was
/// still refused.
fn conflict_error(instructor_id: Uuid, blocking: Option<Uuid>) -> ScheduleError {
    match blocking {
        Some(lesson_id) => ScheduleError::SchedulingConflict { lesson_id },
        None => ScheduleError::ConcurrentConflict { instructor_id },
    }
}

fn sqlstate(report: &Report) -> Option<String> {
    match report.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}

fn into_lessons(rows: Vec<DbLesson>) -> ScheduleResult<Vec<Lesson>> {
    rows.into_iter()
        .map(|row| Lesson::try_from(row).map_err(ScheduleError::Database))
        .collect()
}

#[async_trait]
impl InstructorRepository for PgStore {
    async fn create(&self, new: NewInstructor) -> ScheduleResult<Instructor> {
        let row = instructor::create_instructor(&self.pool, &new).await?;
        Ok(row.into())
    }

    async fn find_all(&self) -> ScheduleResult<Vec<Instructor>> {
        let rows = instructor::get_all_instructors(&self.pool).await?;
        Ok(rows.into_iter().map(Instructor::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Instructor>> {
        let row = instructor::get_instructor_by_id(&self.pool, id).await?;
        Ok(row.map(Instructor::from))
    }

    async fn find_by_specialties(&self, specialties: &[SwimStyle]) -> ScheduleResult<Vec<Instructor>> {
        let rows = instructor::get_instructors_by_specialties(&self.pool, specialties).await?;
        Ok(rows.into_iter().map(Instructor::from).collect())
    }

    async fn replace(&self, id: Uuid, new: NewInstructor) -> ScheduleResult<Option<Instructor>> {
        let row = instructor::update_instructor(&self.pool, id, &new).await?;
        Ok(row.map(Instructor::from))
    }

    async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool> {
        Ok(instructor::delete_instructor(&self.pool, id).await?)
    }

    async fn delete_all(&self) -> ScheduleResult<bool> {
        Ok(instructor::delete_all_instructors(&self.pool).await?)
    }

    async fn find_lessons_for_instructor(&self, id: Uuid) -> ScheduleResult<Vec<Lesson>> {
        let rows = lesson::get_lessons_by_instructor_id(&self.pool, id).await?;
        into_lessons(rows)
    }
}

#[async_trait]
impl LessonRepository for PgStore {
    async fn create(&self, new: NewLesson) -> ScheduleResult<Lesson> {
        match lesson::create_lesson(&self.pool, &new).await {
            Ok(row) => Lesson::try_from(row).map_err(ScheduleError::Database),
            Err(report) => Err(self.lesson_write_error(report, &new, None).await),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Lesson>> {
        lesson::get_lesson_by_id(&self.pool, id)
            .await?
            .map(|row| Lesson::try_from(row).map_err(ScheduleError::Database))
            .transpose()
    }

    async fn replace(&self, id: Uuid, new: NewLesson) -> ScheduleResult<Option<Lesson>> {
        match lesson::update_lesson(&self.pool, id, &new).await {
            Ok(row) => row
                .map(|row| Lesson::try_from(row).map_err(ScheduleError::Database))
                .transpose(),
            Err(report) => Err(self.lesson_write_error(report, &new, Some(id)).await),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool> {
        Ok(lesson::delete_lesson(&self.pool, id).await?)
    }

    async fn delete_all(&self) -> ScheduleResult<bool> {
        Ok(lesson::delete_all_lessons(&self.pool).await?)
    }

    async fn find_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleResult<Vec<Lesson>> {
        let rows = lesson::get_lessons_in_range(&self.pool, start, end).await?;
        into_lessons(rows)
    }
}
