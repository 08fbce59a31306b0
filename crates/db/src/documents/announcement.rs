//! Announcement document.

use campus_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::store::Document;

/// Announcement model for school-wide notices.
///
/// Timestamps are carried as ISO-8601 UTC strings, never parsed; see
/// `campus_common::clock` for the lexical-ordering invariant this relies on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Store-assigned identifier, stable for the record's lifetime.
    pub id: String,

    /// Free-text announcement body.
    pub message: String,

    /// When to start showing the announcement; null means "always started".
    pub start_date: Option<String>,

    /// When the announcement stops being active. Required on create.
    pub expiration_date: String,

    /// Identity of the creating teacher. Set once, never mutated.
    pub created_by: String,
}

impl Model {
    /// Decode a stored document, surfacing the store key as `id`.
    pub fn from_document(doc: Document) -> AppResult<Self> {
        let mut body = doc.body;
        let Some(fields) = body.as_object_mut() else {
            return Err(AppError::Database(format!(
                "malformed announcement document: {}",
                doc.id
            )));
        };
        fields.insert("id".to_string(), doc.id.clone().into());

        serde_json::from_value(body)
            .map_err(|e| AppError::Database(format!("malformed announcement {}: {e}", doc.id)))
    }
}
