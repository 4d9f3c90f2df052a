//! Storage collaborators consumed by the services.
//!
//! Implementations live in `swimsync-db`. Storage faults are reported as
//! `ScheduleError::Database` and passed through untouched. A lesson store
//! must refuse to persist a lesson overlapping another lesson of the same
//! instructor (`SchedulingConflict`), since the in-process check in the
//! scheduler can race with a concurrent writer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    errors::ScheduleResult,
    models::{
        instructor::{Instructor, NewInstructor},
        lesson::{Lesson, NewLesson},
        swimming::SwimStyle,
    },
};

#[async_trait]
pub trait InstructorRepository: Send + Sync {
    async fn create(&self, instructor: NewInstructor) -> ScheduleResult<Instructor>;

    async fn find_all(&self) -> ScheduleResult<Vec<Instructor>>;

    async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Instructor>>;

    /// Instructors teaching every one of `specialties`.
    async fn find_by_specialties(&self, specialties: &[SwimStyle]) -> ScheduleResult<Vec<Instructor>>;

    async fn replace(&self, id: Uuid, instructor: NewInstructor) -> ScheduleResult<Option<Instructor>>;

    async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool>;

    async fn delete_all(&self) -> ScheduleResult<bool>;

    /// Every lesson taught by the instructor, unfiltered by date.
    async fn find_lessons_for_instructor(&self, id: Uuid) -> ScheduleResult<Vec<Lesson>>;
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn create(&self, lesson: NewLesson) -> ScheduleResult<Lesson>;

    async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Lesson>>;

    async fn replace(&self, id: Uuid, lesson: NewLesson) -> ScheduleResult<Option<Lesson>>;

    async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool>;

    async fn delete_all(&self) -> ScheduleResult<bool>;

    /// Lessons starting within `[start, end]`, earliest first.
    async fn find_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleResult<Vec<Lesson>>;
}
