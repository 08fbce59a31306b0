//! In-memory document store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use campus_common::{AppError, AppResult, IdGenerator};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::store::{Document, DocumentStore, Filter, ID_FIELD};

/// Process-local [`DocumentStore`] backed by nested maps.
///
/// Each store operation takes the lock once, so single-document operations
/// are atomic. Store-native order is key order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
    id_gen: IdGenerator,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, body: Value) -> AppResult<String> {
        let Value::Object(mut map) = body else {
            return Err(AppError::Database(
                "document body must be a JSON object".to_string(),
            ));
        };

        let id = match map.remove(ID_FIELD) {
            Some(Value::String(pinned)) => pinned,
            Some(_) => {
                return Err(AppError::Database(format!(
                    "{ID_FIELD} must be a string"
                )));
            }
            None => self.id_gen.generate(),
        };

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.contains_key(&id) {
            return Err(AppError::Database(format!(
                "duplicate key in {collection}: {id}"
            )));
        }

        debug!(collection, id = %id, "Inserted document");
        docs.insert(id.clone(), Value::Object(map));
        Ok(id)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|body| Document {
                id: id.to_string(),
                body: body.clone(),
            }))
    }

    async fn find_many(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, body)| filter.matches(body))
                    .map(|(id, body)| Document {
                        id: id.clone(),
                        body: body.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_one(&self, collection: &str, id: &str, patch: Value) -> AppResult<bool> {
        let Value::Object(patch) = patch else {
            return Err(AppError::Database(
                "update patch must be a JSON object".to_string(),
            ));
        };

        let mut collections = self.collections.write().await;
        let Some(body) = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
        else {
            return Ok(false);
        };

        let Value::Object(fields) = body else {
            return Err(AppError::Database(format!(
                "malformed document in {collection}: {id}"
            )));
        };

        for (key, value) in patch {
            fields.insert(key, value);
        }

        debug!(collection, id, "Updated document");
        Ok(true)
    }

    async fn delete_one(&self, collection: &str, id: &str) -> AppResult<bool> {
        let mut collections = self.collections.write().await;
        let deleted = collections
            .get_mut(collection)
            .is_some_and(|docs| docs.remove(id).is_some());
        if deleted {
            debug!(collection, id, "Deleted document");
        }
        Ok(deleted)
    }
}
