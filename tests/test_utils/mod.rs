//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;

use labbook::calendar::{CalendarClient, CalendarEvent, RetryPolicy};
use labbook::core::db::{async_db, initialize_db};
use labbook::core::{AppConfig, DatabaseConfig};
use labbook::store::{DocumentStore, SqliteStore, record_id};

pub const TEST_DB: &str = "test-group";

/// Config pointing at a throwaway database directory with one
/// configured database and a default presenter.
pub fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        storage_path: dir.path().display().to_string(),
        db_path: dir.path().join("labbook.sqlite3").display().to_string(),
        default_user_id: Some(String::from("sbillinge")),
        databases: vec![DatabaseConfig {
            name: String::from(TEST_DB),
        }],
        gcal_client_id: String::from("test_client_id"),
        gcal_client_secret: String::from("test_client_secret"),
        gcal_redirect_uri: String::from("urn:ietf:wg:oauth:2.0:oob"),
        gcal_calendar_id: String::from("primary"),
        google_api_url: String::from("http://localhost:1"),
        google_oauth_url: String::from("http://localhost:1"),
    }
}

/// A fresh SQLite backed store in a temp directory. Keep the returned
/// `TempDir` alive for as long as the store is used.
pub async fn test_store() -> (TempDir, AppConfig, SqliteStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = test_config(&dir);
    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to initialize db");
        Ok(())
    })
    .await
    .unwrap();
    (dir, config, SqliteStore::new(db))
}

pub fn no_wait() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 60,
        delay: Duration::ZERO,
    }
}

/// In-memory store that records every insert in order.
#[derive(Default)]
pub struct RecordingStore {
    pub seeded: Vec<Value>,
    pub inserts: Mutex<Vec<(String, String, Value)>>,
    pub fail_collection: Option<String>,
}

impl RecordingStore {
    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            seeded: records,
            ..Self::default()
        }
    }

    pub fn inserted(&self) -> Vec<(String, String, Value)> {
        self.inserts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn list_all(&self, _database: &str, _collection: &str) -> Result<Vec<Value>> {
        Ok(self.seeded.clone())
    }

    async fn insert_one(&self, database: &str, collection: &str, record: Value) -> Result<()> {
        if self.fail_collection.as_deref() == Some(collection) {
            anyhow::bail!("write rejected for {}", record_id(&record).unwrap_or("?"));
        }
        self.inserts
            .lock()
            .unwrap()
            .push((database.to_string(), collection.to_string(), record));
        Ok(())
    }
}

/// Calendar that fails the first `failures` attempts.
#[derive(Default)]
pub struct FakeCalendar {
    pub failures: u32,
    pub creates: AtomicU32,
    pub reauths: AtomicU32,
    pub events: Mutex<Vec<CalendarEvent>>,
}

impl FakeCalendar {
    pub fn failing(failures: u32) -> Self {
        Self {
            failures,
            ..Self::default()
        }
    }

    pub fn creates(&self) -> u32 {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn reauths(&self) -> u32 {
        self.reauths.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CalendarClient for FakeCalendar {
    async fn create_event(&self, event: &CalendarEvent) -> bool {
        let call = self.creates.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(event.clone());
        call >= self.failures
    }

    async fn reauthenticate(&self) -> Result<()> {
        self.reauths.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
