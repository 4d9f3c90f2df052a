pub mod health;
pub mod instructor;
pub mod lesson;
