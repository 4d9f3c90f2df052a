//! # SwimSync Core
//!
//! Lesson scheduling and availability validation for a swim school.
//!
//! - [`models`]: instructors, lessons, students, weekly availability
//! - [`clock`]: time-of-day comparison, dates ignored
//! - [`validation`]: instructor and lesson payload checks
//! - [`overlap`]: conflict detection between lessons of one instructor
//! - [`repository`]: storage interfaces the services depend on
//! - [`service`]: instructor management and the lesson scheduling pipeline

pub mod clock;
pub mod errors;
pub mod models;
pub mod overlap;
pub mod repository;
pub mod service;
pub mod validation;
