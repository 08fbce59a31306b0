//! Announcement service.

use campus_common::{AppError, AppResult, now_iso};
use campus_db::documents::announcement;
use campus_db::repositories::{AnnouncementPatch, AnnouncementRepository};

/// Service for managing announcements.
#[derive(Clone)]
pub struct AnnouncementService {
    announcement_repo: AnnouncementRepository,
}

impl AnnouncementService {
    /// Create a new announcement service.
    #[must_use]
    pub const fn new(announcement_repo: AnnouncementRepository) -> Self {
        Self { announcement_repo }
    }

    /// List announcements.
    ///
    /// With `active_only`, returns only records whose display window
    /// contains the current time.
    pub async fn list(&self, active_only: bool) -> AppResult<Vec<announcement::Model>> {
        if active_only {
            self.announcement_repo.find_active(&now_iso()).await
        } else {
            self.announcement_repo.find_all().await
        }
    }

    /// Create a new announcement on behalf of `created_by`.
    ///
    /// Fails with a validation error when the expiration date is absent or
    /// empty; nothing is persisted in that case.
    pub async fn create(
        &self,
        message: String,
        expiration_date: Option<String>,
        start_date: Option<String>,
        created_by: String,
    ) -> AppResult<announcement::Model> {
        let expiration_date = expiration_date
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::Validation("Expiration date required".to_string()))?;

        self.announcement_repo
            .create(message, start_date, expiration_date, created_by)
            .await
    }

    /// Apply a partial update and return the post-update record.
    ///
    /// Fails with a validation error when zero fields are supplied, and
    /// with not-found when no record matches.
    pub async fn update(
        &self,
        id: &str,
        patch: AnnouncementPatch,
    ) -> AppResult<announcement::Model> {
        if patch.is_empty() {
            return Err(AppError::Validation(
                "No update fields provided".to_string(),
            ));
        }

        self.announcement_repo.update(id, patch).await
    }

    /// Delete an announcement.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.announcement_repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Announcement not found: {id}")))
        }
    }
}
