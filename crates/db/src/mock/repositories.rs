use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use swimsync_core::{
    errors::ScheduleResult,
    models::{
        instructor::{Instructor, NewInstructor},
        lesson::{Lesson, NewLesson},
        swimming::SwimStyle,
    },
    repository::{InstructorRepository, LessonRepository},
};
use uuid::Uuid;

// Mock repositories for testing
mock! {
    pub InstructorRepo {}

    #[async_trait]
    impl InstructorRepository for InstructorRepo {
        async fn create(&self, instructor: NewInstructor) -> ScheduleResult<Instructor>;
        async fn find_all(&self) -> ScheduleResult<Vec<Instructor>>;
        async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Instructor>>;
        async fn find_by_specialties(&self, specialties: &[SwimStyle]) -> ScheduleResult<Vec<Instructor>>;
        async fn replace(&self, id: Uuid, instructor: NewInstructor) -> ScheduleResult<Option<Instructor>>;
        async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool>;
        async fn delete_all(&self) -> ScheduleResult<bool>;
        async fn find_lessons_for_instructor(&self, id: Uuid) -> ScheduleResult<Vec<Lesson>>;
    }
}

mock! {
    pub LessonRepo {}

    #[async_trait]
    impl LessonRepository for LessonRepo {
        async fn create(&self, lesson: NewLesson) -> ScheduleResult<Lesson>;
        async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Lesson>>;
        async fn replace(&self, id: Uuid, lesson: NewLesson) -> ScheduleResult<Option<Lesson>>;
        async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool>;
        async fn delete_all(&self) -> ScheduleResult<bool>;
        async fn find_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleResult<Vec<Lesson>>;
    }
}
