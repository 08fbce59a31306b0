//! Business logic services.

#![allow(missing_docs)]

pub mod announcement;
pub mod auth;

pub use announcement::AnnouncementService;
pub use auth::AuthService;
