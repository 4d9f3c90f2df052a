use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    availability::TimeWindow,
    swimming::{LessonType, SwimStyle},
};

pub const MIN_STUDENTS: usize = 1;
pub const MAX_STUDENTS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub preferences: BTreeSet<SwimStyle>,
    pub lesson_type: LessonType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub lesson_type: LessonType,
    pub specialties: BTreeSet<SwimStyle>,
    pub instructor_id: Uuid,
    #[serde(flatten)]
    pub window: TimeWindow,
    pub students: Vec<Student>,
}

/// A validated lesson ready to be handed to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLesson {
    pub lesson_type: LessonType,
    pub specialties: BTreeSet<SwimStyle>,
    pub instructor_id: Uuid,
    #[serde(flatten)]
    pub window: TimeWindow,
    pub students: Vec<Student>,
}

impl NewLesson {
    pub fn with_id(self, id: Uuid) -> Lesson {
        Lesson {
            id,
            lesson_type: self.lesson_type,
            specialties: self.specialties,
            instructor_id: self.instructor_id,
            window: self.window,
            students: self.students,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLessonRequest {
    pub type_lesson: String,
    pub instructor_id: Uuid,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub students: Vec<StudentRequest>,
}

pub type UpdateLessonRequest = NewLessonRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRequest {
    pub name: String,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub lesson_type: String,
}
