//! Announcement repository.

use std::sync::Arc;

use campus_common::{AppError, AppResult};
use serde_json::{Map, Value, json};

use crate::documents::announcement;
use crate::store::{Cond, DocumentStore, Filter};

const COLLECTION: &str = "announcements";

/// Partial update for an announcement. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementPatch {
    /// New message text.
    pub message: Option<String>,
    /// New expiration timestamp.
    pub expiration_date: Option<String>,
    /// New start timestamp.
    pub start_date: Option<String>,
}

impl AnnouncementPatch {
    /// Whether no fields are supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.message.is_none() && self.expiration_date.is_none() && self.start_date.is_none()
    }

    fn into_value(self) -> Value {
        let mut fields = Map::new();
        if let Some(message) = self.message {
            fields.insert("message".to_string(), message.into());
        }
        if let Some(expiration_date) = self.expiration_date {
            fields.insert("expiration_date".to_string(), expiration_date.into());
        }
        if let Some(start_date) = self.start_date {
            fields.insert("start_date".to_string(), start_date.into());
        }
        Value::Object(fields)
    }
}

/// Repository for announcement operations.
#[derive(Clone)]
pub struct AnnouncementRepository {
    store: Arc<dyn DocumentStore>,
}

impl AnnouncementRepository {
    /// Create a new announcement repository.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find an announcement by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<announcement::Model>> {
        match self.store.find_by_id(COLLECTION, id).await? {
            Some(doc) => announcement::Model::from_document(doc).map(Some),
            None => Ok(None),
        }
    }

    /// Find all announcements, in store-native order.
    pub async fn find_all(&self) -> AppResult<Vec<announcement::Model>> {
        self.find_filtered(&Filter::new()).await
    }

    /// Find announcements whose display window contains `now`.
    ///
    /// `now` must be a zero-padded ISO-8601 UTC string; the window check is
    /// lexical string comparison.
    pub async fn find_active(&self, now: &str) -> AppResult<Vec<announcement::Model>> {
        let filter = Filter::new()
            .any_of(Cond::IsNull("start_date".to_string()))
            .any_of(Cond::Lte("start_date".to_string(), now.to_string()))
            .and(Cond::Gte("expiration_date".to_string(), now.to_string()));

        self.find_filtered(&filter).await
    }

    async fn find_filtered(&self, filter: &Filter) -> AppResult<Vec<announcement::Model>> {
        self.store
            .find_many(COLLECTION, filter)
            .await?
            .into_iter()
            .map(announcement::Model::from_document)
            .collect()
    }

    /// Create a new announcement and return it with its assigned ID.
    pub async fn create(
        &self,
        message: String,
        start_date: Option<String>,
        expiration_date: String,
        created_by: String,
    ) -> AppResult<announcement::Model> {
        let body = json!({
            "message": &message,
            "start_date": &start_date,
            "expiration_date": &expiration_date,
            "created_by": &created_by,
        });

        let id = self.store.insert_one(COLLECTION, body).await?;

        Ok(announcement::Model {
            id,
            message,
            start_date,
            expiration_date,
            created_by,
        })
    }

    /// Apply a partial update and return the post-update record.
    ///
    /// The read-back is a separate store call; a concurrent delete between
    /// the two surfaces as `NotFound`.
    pub async fn update(
        &self,
        id: &str,
        patch: AnnouncementPatch,
    ) -> AppResult<announcement::Model> {
        let matched = self
            .store
            .update_one(COLLECTION, id, patch.into_value())
            .await?;
        if !matched {
            return Err(AppError::NotFound(format!("Announcement not found: {id}")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Announcement not found: {id}")))
    }

    /// Delete an announcement. Returns whether a record was deleted.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        self.store.delete_one(COLLECTION, id).await
    }
}
