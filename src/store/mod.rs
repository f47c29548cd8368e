//! Document store accessor
//!
//! A small insert/query-by-filter interface over a schemaless document
//! database. Documents are JSON objects grouped into named collections.
//!
//! # Quick Start
//!
//! ```
//! use chat_backend::store::{DocumentStore, MemoryDocumentStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryDocumentStore::new("chat");
//!     store.create_document("message", json!({ "session_id": "s1" })).await?;
//!
//!     let docs = store.get_documents("message", json!({ "session_id": "s1" }), 50).await?;
//!     assert_eq!(docs.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::Arc;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

/// Insert and query documents grouped by collection.
///
/// Reads return documents in insertion order; a `limit` keeps the oldest
/// matching documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database
    fn name(&self) -> &str;

    /// Insert a document, stamping `created_at` and `updated_at`
    async fn create_document(&self, collection: &str, document: Value) -> StoreResult<()>;

    /// Documents whose top-level fields equal every field of `filter`
    async fn get_documents(
        &self,
        collection: &str,
        filter: Value,
        limit: i64,
    ) -> StoreResult<Vec<Value>>;

    /// Names of all collections holding at least one document, sorted
    async fn list_collections(&self) -> StoreResult<Vec<String>>;
}

/// Handle to the optional document store shared by all request handlers.
///
/// Every call returns a [`StoreResult`]; when no store is configured the
/// result is [`StoreError::NotConfigured`]. Whether a failure matters is
/// left to the caller.
#[derive(Clone, Default)]
pub struct Persistence {
    store: Option<Arc<dyn DocumentStore>>,
}

impl Persistence {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    /// A handle that never persists anything
    pub fn disabled() -> Self {
        Self { store: None }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> StoreResult<&Arc<dyn DocumentStore>> {
        self.store.as_ref().ok_or(StoreError::NotConfigured)
    }

    pub async fn create_document(&self, collection: &str, document: Value) -> StoreResult<()> {
        self.store()?.create_document(collection, document).await
    }

    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Value,
        limit: i64,
    ) -> StoreResult<Vec<Value>> {
        self.store()?.get_documents(collection, filter, limit).await
    }

    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.store()?.list_collections().await
    }
}

/// Add `created_at` / `updated_at` to a document about to be inserted
pub(crate) fn stamp_document(document: Value) -> StoreResult<Value> {
    let mut fields = match document {
        Value::Object(fields) => fields,
        other => {
            return Err(StoreError::Serialization(format!(
                "document must be a JSON object, got {}",
                other
            )))
        }
    };

    let now = Value::String(Utc::now().to_rfc3339());
    fields.insert("created_at".to_string(), now.clone());
    fields.insert("updated_at".to_string(), now);
    Ok(Value::Object(fields))
}

/// Check that a filter is a JSON object
pub(crate) fn filter_fields(filter: &Value) -> StoreResult<&Map<String, Value>> {
    filter
        .as_object()
        .ok_or_else(|| StoreError::InvalidFilter(format!("expected a JSON object, got {}", filter)))
}
