//! Typed document models.

pub mod announcement;
pub mod teacher;
