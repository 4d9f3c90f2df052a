pub mod instructor;
pub mod lesson;

pub use instructor::InstructorService;
pub use lesson::LessonService;
