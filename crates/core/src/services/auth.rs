//! Authentication service.
//!
//! Authentication here is an existence check only: a caller is treated as
//! signed in when a teacher record with the supplied username exists. No
//! password, token, or session is involved. This mirrors the system's
//! deliberately weak contract; do not silently strengthen it.

use campus_common::{AppError, AppResult};
use campus_db::documents::teacher;
use campus_db::repositories::TeacherRepository;

/// Service resolving caller identities against the teacher store.
#[derive(Clone)]
pub struct AuthService {
    teacher_repo: TeacherRepository,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(teacher_repo: TeacherRepository) -> Self {
        Self { teacher_repo }
    }

    /// Resolve a username to its teacher record, or fail as unauthorized.
    pub async fn require_teacher(&self, username: &str) -> AppResult<teacher::Model> {
        self.teacher_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}
