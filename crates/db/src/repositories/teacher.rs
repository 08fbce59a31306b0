//! Teacher repository.

use std::sync::Arc;

use campus_common::AppResult;
use serde_json::json;

use crate::documents::teacher;
use crate::store::DocumentStore;

const COLLECTION: &str = "teachers";

/// Repository for teacher (principal) records.
#[derive(Clone)]
pub struct TeacherRepository {
    store: Arc<dyn DocumentStore>,
}

impl TeacherRepository {
    /// Create a new teacher repository.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Look up a teacher by username. Teachers are keyed by username, so
    /// this is a single fetch by store key.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<teacher::Model>> {
        match self.store.find_by_id(COLLECTION, username).await? {
            Some(doc) => teacher::Model::from_document(doc).map(Some),
            None => Ok(None),
        }
    }

    /// Insert a teacher record, keyed by username.
    pub async fn create(
        &self,
        username: String,
        display_name: Option<String>,
    ) -> AppResult<teacher::Model> {
        let body = json!({
            "_id": &username,
            "username": &username,
            "display_name": &display_name,
        });

        self.store.insert_one(COLLECTION, body).await?;

        Ok(teacher::Model {
            username,
            display_name,
        })
    }
}
