use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use eyre::{Report, eyre};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use swimsync_core::models::{
    availability::{TimeWindow, WeeklyAvailability},
    instructor::Instructor,
    lesson::{Lesson, Student},
    swimming::SwimStyle,
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInstructor {
    pub id: Uuid,
    pub name: String,
    pub specialties: Json<BTreeSet<SwimStyle>>,
    pub availability: Json<WeeklyAvailability>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLesson {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub lesson_type: String,
    pub specialties: Json<BTreeSet<SwimStyle>>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub students: Json<Vec<Student>>,
    pub created_at: DateTime<Utc>,
}

impl From<DbInstructor> for Instructor {
    fn from(row: DbInstructor) -> Self {
        Instructor {
            id: row.id,
            name: row.name,
            specialties: row.specialties.0,
            availability: row.availability.0,
        }
    }
}

impl TryFrom<DbLesson> for Lesson {
    type Error = Report;

    fn try_from(row: DbLesson) -> Result<Self, Self::Error> {
        let lesson_type = row
            .lesson_type
            .parse()
            .map_err(|e| eyre!("Corrupt lesson {}: {}", row.id, e))?;

        Ok(Lesson {
            id: row.id,
            lesson_type,
            specialties: row.specialties.0,
            instructor_id: row.instructor_id,
            window: TimeWindow::new(row.start_time, row.end_time),
            students: row.students.0,
        })
    }
}
