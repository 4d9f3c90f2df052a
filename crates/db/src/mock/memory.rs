//! Process-local store used by tests and the API test harness.
//!
//! Mirrors the Postgres constraints that matter to the scheduler: lessons
//! reference an existing instructor, deleting an instructor drops its
//! lessons, and overlapping lessons of one instructor are refused while the
//! write lock is held.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use swimsync_core::{
    errors::{ScheduleError, ScheduleResult},
    models::{
        instructor::{Instructor, NewInstructor},
        lesson::{Lesson, NewLesson},
        swimming::SwimStyle,
    },
    overlap::ensure_no_conflict,
    repository::{InstructorRepository, LessonRepository},
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    // Insertion order doubles as listing order.
    instructors: Vec<Instructor>,
    lessons: HashMap<Uuid, Lesson>,
}

impl Tables {
    fn check_lesson(&self, lesson: &NewLesson, ignore: Option<Uuid>) -> ScheduleResult<()> {
        if !self.instructors.iter().any(|i| i.id == lesson.instructor_id) {
            return Err(ScheduleError::InstructorNotFound(lesson.instructor_id));
        }
        let same_instructor = self
            .lessons
            .values()
            .filter(|existing| existing.instructor_id == lesson.instructor_id);
        ensure_no_conflict(&lesson.window, same_instructor, ignore)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lesson_count(&self) -> usize {
        self.tables.read().await.lessons.len()
    }
}

#[async_trait]
impl InstructorRepository for InMemoryStore {
    async fn create(&self, new: NewInstructor) -> ScheduleResult<Instructor> {
        let instructor = new.with_id(Uuid::new_v4());
        self.tables.write().await.instructors.push(instructor.clone());
        Ok(instructor)
    }

    async fn find_all(&self) -> ScheduleResult<Vec<Instructor>> {
        Ok(self.tables.read().await.instructors.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Instructor>> {
        let tables = self.tables.read().await;
        Ok(tables.instructors.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_specialties(&self, specialties: &[SwimStyle]) -> ScheduleResult<Vec<Instructor>> {
        let tables = self.tables.read().await;
        Ok(tables
            .instructors
            .iter()
            .filter(|i| specialties.iter().all(|s| i.specialties.contains(s)))
            .cloned()
            .collect())
    }

    async fn replace(&self, id: Uuid, new: NewInstructor) -> ScheduleResult<Option<Instructor>> {
        let mut tables = self.tables.write().await;
        let Some(slot) = tables.instructors.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        *slot = new.with_id(id);
        Ok(Some(slot.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.instructors.len();
        tables.instructors.retain(|i| i.id != id);
        if tables.instructors.len() == before {
            return Ok(false);
        }
        tables.lessons.retain(|_, lesson| lesson.instructor_id != id);
        Ok(true)
    }

    async fn delete_all(&self) -> ScheduleResult<bool> {
        let mut tables = self.tables.write().await;
        let had_any = !tables.instructors.is_empty();
        tables.instructors.clear();
        tables.lessons.clear();
        Ok(had_any)
    }

    async fn find_lessons_for_instructor(&self, id: Uuid) -> ScheduleResult<Vec<Lesson>> {
        let tables = self.tables.read().await;
        let mut lessons: Vec<Lesson> = tables
            .lessons
            .values()
            .filter(|lesson| lesson.instructor_id == id)
            .cloned()
            .collect();
        lessons.sort_by_key(|lesson| lesson.window.start_time);
        Ok(lessons)
    }
}

#[async_trait]
impl LessonRepository for InMemoryStore {
    async fn create(&self, new: NewLesson) -> ScheduleResult<Lesson> {
        let mut tables = self.tables.write().await;
        tables.check_lesson(&new, None)?;

        let lesson = new.with_id(Uuid::new_v4());
        tables.lessons.insert(lesson.id, lesson.clone());
        Ok(lesson)
    }

    async fn find_by_id(&self, id: Uuid) -> ScheduleResult<Option<Lesson>> {
        Ok(self.tables.read().await.lessons.get(&id).cloned())
    }

    async fn replace(&self, id: Uuid, new: NewLesson) -> ScheduleResult<Option<Lesson>> {
        let mut tables = self.tables.write().await;
        if !tables.lessons.contains_key(&id) {
            return Ok(None);
        }
        tables.check_lesson(&new, Some(id))?;

        let lesson = new.with_id(id);
        tables.lessons.insert(id, lesson.clone());
        Ok(Some(lesson))
    }

    async fn delete_by_id(&self, id: Uuid) -> ScheduleResult<bool> {
        Ok(self.tables.write().await.lessons.remove(&id).is_some())
    }

    async fn delete_all(&self) -> ScheduleResult<bool> {
        let mut tables = self.tables.write().await;
        let had_any = !tables.lessons.is_empty();
        tables.lessons.clear();
        Ok(had_any)
    }

    async fn find_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleResult<Vec<Lesson>> {
        let tables = self.tables.read().await;
        let mut lessons: Vec<Lesson> = tables
            .lessons
            .values()
            .filter(|lesson| lesson.window.start_time >= start && lesson.window.start_time <= end)
            .cloned()
            .collect();
        lessons.sort_by_key(|lesson| lesson.window.start_time);
        Ok(lessons)
    }
}
