use std::{cmp::Ordering, sync::Arc};

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::{
    clock::compare_time_of_day,
    errors::{ScheduleError, ScheduleResult},
    models::{
        availability::{TimeWindow, weekday_from_index},
        instructor::{Instructor, NewInstructorRequest, UpdateInstructorRequest},
        swimming::SwimStyle,
    },
    repository::InstructorRepository,
    validation::{parse_styles, validate_instructor},
};

/// Instructor management on top of an [`InstructorRepository`].
pub struct InstructorService {
    instructors: Arc<dyn InstructorRepository>,
}

impl InstructorService {
    pub fn new(instructors: Arc<dyn InstructorRepository>) -> Self {
        Self { instructors }
    }

    pub async fn create_instructor(&self, request: &NewInstructorRequest) -> ScheduleResult<Instructor> {
        let instructor = validate_instructor(request)?;
        let created = self.instructors.create(instructor).await?;
        info!("Instructor created: id={}, name={}", created.id, created.name);
        Ok(created)
    }

    pub async fn list_instructors(&self) -> ScheduleResult<Vec<Instructor>> {
        self.instructors.find_all().await
    }

    pub async fn get_instructor(&self, id: Uuid) -> ScheduleResult<Instructor> {
        self.instructors
            .find_by_id(id)
            .await?
            .ok_or(ScheduleError::InstructorNotFound(id))
    }

    pub async fn instructors_by_specialties<S: AsRef<str>>(
        &self,
        specialties: &[S],
    ) -> ScheduleResult<Vec<Instructor>> {
        let styles: Vec<SwimStyle> = parse_styles(specialties)
            .map_err(ScheduleError::InvalidRequest)?
            .into_iter()
            .collect();
        self.instructors.find_by_specialties(&styles).await
    }

    /// Instructors whose window on `day` covers `start..end` by time of day.
    pub async fn instructors_available(
        &self,
        day: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ScheduleResult<Vec<Instructor>> {
        let day = weekday_from_index(day).ok_or_else(|| {
            ScheduleError::InvalidRequest(
                "Invalid day. Must be between 0 (Sunday) and 6 (Saturday).".to_string(),
            )
        })?;
        if compare_time_of_day(&start, &end) != Ordering::Less {
            return Err(ScheduleError::InvalidRequest(
                "Invalid time range. start must be earlier than end.".to_string(),
            ));
        }

        let wanted = TimeWindow::new(start, end);
        let instructors = self.instructors.find_all().await?;
        Ok(instructors
            .into_iter()
            .filter(|instructor| {
                instructor
                    .availability
                    .window_for(day)
                    .is_ok_and(|window| window.contains_time_of_day(&wanted))
            })
            .collect())
    }

    /// Replaces name, specialties and availability wholesale.
    pub async fn update_instructor(
        &self,
        id: Uuid,
        request: &UpdateInstructorRequest,
    ) -> ScheduleResult<Instructor> {
        self.get_instructor(id).await?;
        let instructor = validate_instructor(request)?;
        let updated = self
            .instructors
            .replace(id, instructor)
            .await?
            .ok_or(ScheduleError::InstructorNotFound(id))?;
        info!("Instructor updated: id={}", updated.id);
        Ok(updated)
    }

    pub async fn delete_instructor(&self, id: Uuid) -> ScheduleResult<bool> {
        self.instructors.delete_by_id(id).await
    }

    pub async fn delete_all_instructors(&self) -> ScheduleResult<bool> {
        self.instructors.delete_all().await
    }
}
