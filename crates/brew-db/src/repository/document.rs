//! # Document Repository
//!
//! SQL for the `documents` table backing the SQLite store.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    documents table                                      │
//! │                                                                         │
//! │  seq │ key (uuid)  │ collection │ fields (JSON)            │ created_at │
//! │  ────┼─────────────┼────────────┼──────────────────────────┼─────────── │
//! │   1  │ 6f1c…       │ bases      │ {"name":"Espresso"}      │ …          │
//! │   2  │ 0a9e…       │ syrups     │ {"name":"Vanilla"}       │ …          │
//! │   3  │ c44d…       │ beverages  │ {"name":"…","base":{…}}  │ …          │
//! │                                                                         │
//! │  list: WHERE collection = ? ORDER BY seq   (insertion order)           │
//! │  insert: key generated here, never by the caller                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::document::{Document, Fields};
use crate::error::DbResult;

/// Repository for raw document rows.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    /// Creates a new DocumentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DocumentRepository { pool }
    }

    /// Lists every document of a collection in insertion order.
    ///
    /// Rows whose `fields` column is not a JSON object are skipped with a
    /// warning.
    pub async fn list(&self, collection: &str) -> DbResult<Vec<Document>> {
        debug!(collection = %collection, "Listing documents");

        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT key, fields
            FROM documents
            WHERE collection = ?1
            ORDER BY seq
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for (key, raw) in rows {
            match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(fields)) => documents.push(Document::new(key, fields)),
                Ok(_) | Err(_) => {
                    warn!(collection = %collection, key = %key, "Skipping document with non-object fields");
                }
            }
        }

        debug!(count = documents.len(), "Listed documents");
        Ok(documents)
    }

    /// Inserts a document and returns its generated key.
    pub async fn insert(&self, collection: &str, fields: &Fields) -> DbResult<String> {
        let key = Uuid::new_v4().to_string();
        let payload = serde_json::to_string(fields)?;

        debug!(collection = %collection, key = %key, "Inserting document");

        sqlx::query(
            r#"
            INSERT INTO documents (key, collection, fields, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&key)
        .bind(collection)
        .bind(payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(key)
    }

    /// Counts documents in a collection (for diagnostics and seeding).
    pub async fn count(&self, collection: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = ?1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use serde_json::{json, Map};

    #[tokio::test]
    async fn test_insert_then_list_preserves_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.documents();

        let mut first = Map::new();
        first.insert("name".to_string(), json!("Espresso"));
        let mut second = Map::new();
        second.insert("name".to_string(), json!("Cold Brew"));

        let k1 = repo.insert("bases", &first).await.unwrap();
        let k2 = repo.insert("bases", &second).await.unwrap();

        let docs = repo.list("bases").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].key, k1);
        assert_eq!(docs[1].key, k2);
        assert_eq!(docs[1].fields["name"], json!("Cold Brew"));
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.documents();

        repo.insert("syrups", &Map::new()).await.unwrap();

        assert_eq!(repo.count("syrups").await.unwrap(), 1);
        assert_eq!(repo.count("creamers").await.unwrap(), 0);
        assert!(repo.list("creamers").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_object_rows_are_skipped() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        sqlx::query(
            "INSERT INTO documents (key, collection, fields, created_at) VALUES ('bad', 'bases', '[1,2]', '2024-01-01T00:00:00Z')",
        )
        .execute(db.pool())
        .await
        .unwrap();

        assert!(db.documents().list("bases").await.unwrap().is_empty());
    }
}
