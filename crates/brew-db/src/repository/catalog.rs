//! # Catalog Repository
//!
//! Typed, read-only access to the base, syrup and creamer collections.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, warn};

use brew_core::CatalogItem;

use crate::document::Document;
use crate::error::DbResult;
use crate::store::DocumentStore;

/// Repository for one catalog collection.
///
/// ## Usage
/// ```rust,ignore
/// let bases = CatalogRepository::<Base>::new(store.clone()).list().await?;
/// ```
pub struct CatalogRepository<T> {
    store: Arc<dyn DocumentStore>,
    _item: PhantomData<fn() -> T>,
}

impl<T: CatalogItem> CatalogRepository<T> {
    /// Creates a repository over any document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        CatalogRepository {
            store,
            _item: PhantomData,
        }
    }

    /// Reads the whole catalog in store order.
    ///
    /// Documents that do not map to `T` are logged and left out; a bad
    /// document never fails the read.
    pub async fn list(&self) -> DbResult<Vec<T>> {
        let documents = self.store.list_collection(T::COLLECTION).await?;
        let items = decode_all(T::COLLECTION, documents);

        debug!(collection = T::COLLECTION, count = items.len(), "Loaded catalog");
        Ok(items)
    }
}

impl<T> Clone for CatalogRepository<T> {
    fn clone(&self) -> Self {
        CatalogRepository {
            store: Arc::clone(&self.store),
            _item: PhantomData,
        }
    }
}

/// Maps documents to records, dropping the malformed ones.
pub(crate) fn decode_all<T: serde::de::DeserializeOwned>(
    collection: &str,
    documents: Vec<Document>,
) -> Vec<T> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let key = doc.key.clone();
            match doc.into_record::<T>() {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(collection = %collection, key = %key, error = %e, "Skipping malformed document");
                    None
                }
            }
        })
        .collect()
}
