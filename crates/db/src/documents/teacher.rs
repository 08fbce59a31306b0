//! Teacher document.

use campus_common::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::store::Document;

/// Teacher account, used as the principal record for authentication.
///
/// The store key is the username itself, so authentication is a single
/// lookup by key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Sign-in identity.
    pub username: String,

    /// Human-readable name.
    pub display_name: Option<String>,
}

impl Model {
    /// Decode a stored document.
    pub fn from_document(doc: Document) -> AppResult<Self> {
        serde_json::from_value(doc.body)
            .map_err(|e| AppError::Database(format!("malformed teacher {}: {e}", doc.id)))
    }
}
