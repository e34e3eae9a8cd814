use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio_rusqlite::Connection;

use super::{DocumentStore, require_id};

#[derive(Clone)]
pub struct SqliteStore {
    db: Connection,
}

impl SqliteStore {
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn list_all(&self, database: &str, collection: &str) -> Result<Vec<Value>> {
        let database = database.to_owned();
        let collection = collection.to_owned();
        let rows: Vec<String> = self
            .db
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT data FROM document WHERE database = ?1 AND collection = ?2 ORDER BY id",
                )?;
                let rows = stmt
                    .query_map([&database, &collection], |row| row.get(0))?
                    .collect::<Result<Vec<String>, _>>()?;
                Ok(rows)
            })
            .await?;

        rows.iter()
            .map(|data| serde_json::from_str(data).context("Corrupt record in document table"))
            .collect()
    }

    async fn insert_one(&self, database: &str, collection: &str, record: Value) -> Result<()> {
        let id = require_id(&record)?;
        let data = record.to_string();
        let database = database.to_owned();
        let collection = collection.to_owned();

        self.db
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO document (database, collection, id, data) VALUES (?1, ?2, ?3, ?4)",
                    (&database, &collection, &id, &data),
                )?;
                Ok(())
            })
            .await
            .context("Failed to insert record")?;

        Ok(())
    }
}
