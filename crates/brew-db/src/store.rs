//! # Document Store Contract
//!
//! The two operations the session needs from a document database.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      DocumentStore                                      │
//! │                                                                         │
//! │  list_collection("bases")      → [Document { key, fields }, ...]       │
//! │  insert_document("beverages",  → "new-key"                             │
//! │                  fields)                                                │
//! │                                                                         │
//! │  Implementations                                                        │
//! │  ├── Database     (pool.rs)   SQLite, production                        │
//! │  └── MemoryStore  (memory.rs) tests, demos, offline fixtures            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Update, delete, filtered queries and transactions are not part of the
//! contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::document::{Document, Fields};
use crate::error::DbResult;

/// Bulk-read and insert access to a document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every document of a collection in insertion order.
    ///
    /// An unknown collection is empty, not an error.
    async fn list_collection(&self, collection: &str) -> DbResult<Vec<Document>>;

    /// Inserts a document and returns the key the store assigned to it.
    async fn insert_document(&self, collection: &str, fields: Fields) -> DbResult<String>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn list_collection(&self, collection: &str) -> DbResult<Vec<Document>> {
        (**self).list_collection(collection).await
    }

    async fn insert_document(&self, collection: &str, fields: Fields) -> DbResult<String> {
        (**self).insert_document(collection, fields).await
    }
}
