use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid instructor: {0}")]
    InvalidInstructor(String),

    #[error("Invalid lesson: {0}")]
    InvalidLesson(String),

    #[error("Instructor with ID {0} not found")]
    InstructorNotFound(Uuid),

    #[error("Lesson with ID {0} not found")]
    LessonNotFound(Uuid),

    #[error("Specialty mismatch: {0}")]
    SpecialtyMismatch(String),

    #[error("Instructor unavailable: {0}")]
    InstructorUnavailable(String),

    #[error("Outside availability: {0}")]
    OutsideAvailability(String),

    #[error("Scheduling conflict with lesson {lesson_id}")]
    SchedulingConflict { lesson_id: Uuid },

    /// Storage refused an overlapping write but the blocking lesson could
    /// not be identified afterwards.
    #[error("Scheduling conflict with another lesson of instructor {instructor_id}")]
    ConcurrentConflict { instructor_id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl ScheduleError {
    /// True for the kinds that describe a rule the request broke, as opposed
    /// to a missing record or a storage fault.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            ScheduleError::InstructorNotFound(_)
                | ScheduleError::LessonNotFound(_)
                | ScheduleError::Database(_)
        )
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
