//! Document store holding every collection as JSON records keyed by `_id`.

pub mod sqlite;

pub use sqlite::SqliteStore;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All records in `collection`, ordered by id.
    async fn list_all(&self, database: &str, collection: &str) -> Result<Vec<Value>>;

    /// Insert a single record. The record must have a string `_id`.
    async fn insert_one(&self, database: &str, collection: &str, record: Value) -> Result<()>;
}

/// The `_id` of a record, if it has one.
pub fn record_id(record: &Value) -> Option<&str> {
    record.get("_id").and_then(Value::as_str)
}

pub(crate) fn require_id(record: &Value) -> Result<String> {
    record_id(record)
        .map(str::to_string)
        .ok_or(anyhow!("Record is missing a string _id"))
}
