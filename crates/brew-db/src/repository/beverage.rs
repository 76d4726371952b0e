//! # Beverage Repository
//!
//! Create and list access to saved beverages. There is no update or delete:
//! once written, a beverage is immutable from this side.

use std::sync::Arc;

use tracing::{debug, info};

use brew_core::{Beverage, SavedBeverage, BEVERAGES_COLLECTION};

use crate::document::to_fields;
use crate::error::DbResult;
use crate::repository::catalog::decode_all;
use crate::store::DocumentStore;

/// Repository for the `beverages` collection.
#[derive(Clone)]
pub struct BeverageRepository {
    store: Arc<dyn DocumentStore>,
}

impl BeverageRepository {
    /// Creates a repository over any document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        BeverageRepository { store }
    }

    /// Reads every saved beverage in store order.
    pub async fn list(&self) -> DbResult<Vec<SavedBeverage>> {
        let documents = self.store.list_collection(BEVERAGES_COLLECTION).await?;
        let saved: Vec<SavedBeverage> = decode_all(BEVERAGES_COLLECTION, documents);

        debug!(count = saved.len(), "Loaded saved beverages");
        Ok(saved)
    }

    /// Writes a beverage and returns it with the key the store assigned.
    pub async fn insert(&self, beverage: &Beverage) -> DbResult<SavedBeverage> {
        let fields = to_fields(beverage)?;
        let id = self
            .store
            .insert_document(BEVERAGES_COLLECTION, fields)
            .await?;

        info!(id = %id, name = %beverage.name, "Saved beverage");
        Ok(SavedBeverage::new(id, beverage.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use brew_core::{Base, Creamer, Syrup, TemperaturePreset};

    fn beverage(name: &str) -> Beverage {
        Beverage {
            name: name.to_string(),
            temperature: Some(TemperaturePreset::new("Iced")),
            base: Base::new("b1", "Espresso"),
            syrup: Syrup::new("s1", "Vanilla"),
            creamer: Creamer::new("c1", "Oat"),
        }
    }

    #[tokio::test]
    async fn test_insert_returns_store_key() {
        let store = Arc::new(MemoryStore::new());
        let repo = BeverageRepository::new(store.clone());

        let saved = repo.insert(&beverage("Morning")).await.unwrap();

        let docs = store.list_collection("beverages").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].key, saved.id);
        assert_eq!(saved.beverage, beverage("Morning"));
    }

    #[tokio::test]
    async fn test_list_reads_back_inserted() {
        let repo = BeverageRepository::new(Arc::new(MemoryStore::new()));

        let first = repo.insert(&beverage("One")).await.unwrap();
        let second = repo.insert(&beverage("Two")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }
}
