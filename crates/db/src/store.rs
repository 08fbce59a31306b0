//! The document store abstraction.

use async_trait::async_trait;
use campus_common::AppResult;
use serde_json::Value;

/// Reserved body field used to pin a document's store key on insert.
pub const ID_FIELD: &str = "_id";

/// A stored document together with its store-assigned key.
///
/// The key is kept outside the body so it never leaks into persisted or
/// serialized shapes under its internal name; callers expose it as `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Store-assigned key.
    pub id: String,
    /// Document body (always a JSON object).
    pub body: Value,
}

/// A single filter condition over one document field.
///
/// String comparisons are lexical. All timestamps in the system are
/// zero-padded ISO-8601 UTC strings, so lexical order equals chronological
/// order; see `campus_common::clock`.
#[derive(Debug, Clone)]
pub enum Cond {
    /// Field is null or absent.
    IsNull(String),
    /// Field is a string lexically less than or equal to the given value.
    Lte(String, String),
    /// Field is a string lexically greater than or equal to the given value.
    Gte(String, String),
}

impl Cond {
    fn holds(&self, body: &Value) -> bool {
        match self {
            Self::IsNull(field) => body.get(field).is_none_or(Value::is_null),
            Self::Lte(field, bound) => body
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|v| v <= bound.as_str()),
            Self::Gte(field, bound) => body
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|v| v >= bound.as_str()),
        }
    }
}

/// A document filter: a disjunction group and a conjunction group.
///
/// A document matches when at least one `any` condition holds (vacuously
/// true when the group is empty) and every `all` condition holds. The empty
/// filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    any: Vec<Cond>,
    all: Vec<Cond>,
}

impl Filter {
    /// Create an empty filter that matches every document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition to the disjunction group.
    #[must_use]
    pub fn any_of(mut self, cond: Cond) -> Self {
        self.any.push(cond);
        self
    }

    /// Add a condition to the conjunction group.
    #[must_use]
    pub fn and(mut self, cond: Cond) -> Self {
        self.all.push(cond);
        self
    }

    /// Evaluate this filter against a document body.
    #[must_use]
    pub fn matches(&self, body: &Value) -> bool {
        let any_ok = self.any.is_empty() || self.any.iter().any(|c| c.holds(body));
        let all_ok = self.all.iter().all(|c| c.holds(body));
        any_ok && all_ok
    }
}

/// Generic schemaless document persistence.
///
/// Single-document operations are atomic; nothing here provides cross-record
/// transactions. Implementations return [`campus_common::AppError::Database`]
/// for backend failures.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its store-assigned key.
    ///
    /// If the body carries a string [`ID_FIELD`], that value is used as the
    /// key (and stripped from the stored body); otherwise the store assigns
    /// a fresh key. Inserting an existing key is a database error.
    async fn insert_one(&self, collection: &str, body: Value) -> AppResult<String>;

    /// Fetch a single document by key.
    async fn find_by_id(&self, collection: &str, id: &str) -> AppResult<Option<Document>>;

    /// Fetch all documents matching a filter, in store-native order.
    async fn find_many(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>>;

    /// Merge the fields of a JSON object `patch` into the document with the
    /// given key. Returns whether a document matched.
    async fn update_one(&self, collection: &str, id: &str, patch: Value) -> AppResult<bool>;

    /// Delete the document with the given key. Returns whether a document
    /// was deleted.
    async fn delete_one(&self, collection: &str, id: &str) -> AppResult<bool>;
}
