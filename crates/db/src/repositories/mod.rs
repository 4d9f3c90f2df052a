pub mod instructor;
pub mod lesson;
