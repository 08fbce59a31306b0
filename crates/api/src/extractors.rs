//! Request extractors.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use campus_common::AppError;
use campus_db::documents::teacher;
use serde::Deserialize;

use crate::state::AppState;

/// Authenticated teacher extractor.
///
/// Reads the `username` query parameter and resolves it against the teacher
/// store. Existence of the record is the entire authentication contract:
/// there is no password, token, or session check.
#[derive(Debug, Clone)]
pub struct AuthTeacher(pub teacher::Model);

#[derive(Debug, Deserialize)]
struct AuthQuery {
    #[serde(default)]
    username: Option<String>,
}

impl FromRequestParts<AppState> for AuthTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) =
            Query::<AuthQuery>::try_from_uri(&parts.uri).map_err(|_| AppError::Unauthorized)?;
        let username = query.username.ok_or(AppError::Unauthorized)?;

        let teacher = state.auth_service.require_teacher(&username).await?;
        Ok(Self(teacher))
    }
}
