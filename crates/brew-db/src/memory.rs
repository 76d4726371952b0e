//! # In-Memory Document Store
//!
//! A [`DocumentStore`] kept entirely in process memory. Used by tests and
//! for running the session without a database file.
//!
//! Keys are generated here (UUID v4) exactly like the SQLite backend does,
//! so callers never see a difference. Fixtures with fixed keys can be
//! preloaded through [`MemoryStore::with_documents`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::document::{Document, Fields};
use crate::error::DbResult;
use crate::store::DocumentStore;

/// Ordered, per-collection documents behind a `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    inserts: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preloads documents into a collection, appended in the given order.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let store = MemoryStore::new()
    ///     .with_documents("bases", vec![Document::new("b1", fields)]);
    /// ```
    pub fn with_documents(mut self, collection: &str, documents: Vec<Document>) -> Self {
        self.collections
            .get_mut()
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        self
    }

    /// Number of documents currently in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Number of successful `insert_document` calls since creation.
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_collection(&self, collection: &str) -> DbResult<Vec<Document>> {
        let documents = self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default();

        debug!(collection, count = documents.len(), "Listed memory collection");
        Ok(documents)
    }

    async fn insert_document(&self, collection: &str, fields: Fields) -> DbResult<String> {
        let key = Uuid::new_v4().to_string();

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(key.clone(), fields));
        self.inserts.fetch_add(1, Ordering::SeqCst);

        debug!(collection, key = %key, "Inserted memory document");
        Ok(key)
    }
}
