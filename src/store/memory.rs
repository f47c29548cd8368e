use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::store::{filter_fields, stamp_document, DocumentStore, StoreError, StoreResult};

/// In-process document store.
///
/// Keeps documents per collection in insertion order. `set_unavailable(true)`
/// makes every call fail with a connection error, which is how an
/// unreachable database looks to callers.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    name: String,
    collections: Mutex<BTreeMap<String, Vec<Value>>>,
    unavailable: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of documents stored in a collection
    pub fn len(&self, collection: &str) -> usize {
        self.lock()
            .map(|collections| collections.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Connection(format!(
                "database '{}' is unreachable",
                self.name
            )));
        }
        Ok(())
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, BTreeMap<String, Vec<Value>>>> {
        self.collections
            .lock()
            .map_err(|_| StoreError::Database("document map lock poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(&self, collection: &str, document: Value) -> StoreResult<()> {
        self.check_available()?;
        let document = stamp_document(document)?;

        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Value,
        limit: i64,
    ) -> StoreResult<Vec<Value>> {
        self.check_available()?;
        let fields = filter_fields(&filter)?;
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        let collections = self.lock()?;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|doc| fields.iter().all(|(key, value)| doc.get(key) == Some(value)))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        self.check_available()?;
        Ok(self.lock()?.keys().cloned().collect())
    }
}
