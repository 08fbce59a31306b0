//! Announcement endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use campus_common::AppResult;
use campus_db::documents::announcement;
use campus_db::repositories::AnnouncementPatch;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{extractors::AuthTeacher, state::AppState};

/// Create announcement router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_announcements))
        .route("/", post(create_announcement))
        .route("/{id}", put(update_announcement))
        .route("/{id}", delete(delete_announcement))
}

/// Announcement response.
#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    pub id: String,
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_by: String,
}

impl From<announcement::Model> for AnnouncementResponse {
    fn from(announcement: announcement::Model) -> Self {
        Self {
            id: announcement.id,
            message: announcement.message,
            start_date: announcement.start_date,
            expiration_date: announcement.expiration_date,
            created_by: announcement.created_by,
        }
    }
}

/// List announcements query.
#[derive(Debug, Deserialize)]
pub struct ListAnnouncementsQuery {
    /// If true, only list announcements whose display window contains now.
    #[serde(default)]
    pub active_only: bool,
}

/// List announcements.
async fn list_announcements(
    State(state): State<AppState>,
    Query(query): Query<ListAnnouncementsQuery>,
) -> AppResult<Json<Vec<AnnouncementResponse>>> {
    let announcements = state.announcement_service.list(query.active_only).await?;

    Ok(Json(
        announcements
            .into_iter()
            .map(AnnouncementResponse::from)
            .collect(),
    ))
}

/// Create announcement request.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub message: String,
    /// Required; requests without it are rejected as validation errors.
    pub expiration_date: Option<String>,
    pub start_date: Option<String>,
}

/// Create announcement (signed-in teachers only).
async fn create_announcement(
    AuthTeacher(teacher): AuthTeacher,
    State(state): State<AppState>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> AppResult<Json<AnnouncementResponse>> {
    info!(username = %teacher.username, "Creating announcement");

    let announcement = state
        .announcement_service
        .create(
            req.message,
            req.expiration_date,
            req.start_date,
            teacher.username,
        )
        .await?;

    Ok(Json(AnnouncementResponse::from(announcement)))
}

/// Update announcement request. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAnnouncementRequest {
    pub message: Option<String>,
    pub expiration_date: Option<String>,
    pub start_date: Option<String>,
}

/// Update announcement (signed-in teachers only).
async fn update_announcement(
    AuthTeacher(teacher): AuthTeacher,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAnnouncementRequest>,
) -> AppResult<Json<AnnouncementResponse>> {
    info!(username = %teacher.username, announcement_id = %id, "Updating announcement");

    let patch = AnnouncementPatch {
        message: req.message,
        expiration_date: req.expiration_date,
        start_date: req.start_date,
    };

    let announcement = state.announcement_service.update(&id, patch).await?;

    Ok(Json(AnnouncementResponse::from(announcement)))
}

/// Delete confirmation.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Delete announcement (signed-in teachers only).
async fn delete_announcement(
    AuthTeacher(teacher): AuthTeacher,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    info!(username = %teacher.username, announcement_id = %id, "Deleting announcement");

    state.announcement_service.delete(&id).await?;

    Ok(Json(DeleteResponse {
        message: "Announcement deleted".to_string(),
    }))
}
