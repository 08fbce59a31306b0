//! Shared application state.

use campus_core::{AnnouncementService, AuthService};

/// Application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Announcement CRUD service.
    pub announcement_service: AnnouncementService,
    /// Caller identity resolution.
    pub auth_service: AuthService,
}
