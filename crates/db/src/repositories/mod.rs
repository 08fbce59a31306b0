//! Typed repositories over the document store.

mod announcement;
mod teacher;

pub use announcement::{AnnouncementPatch, AnnouncementRepository};
pub use teacher::TeacherRepository;
