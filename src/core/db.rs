use anyhow::{Context, Result};
use rusqlite::Connection as SqliteConnection;
use tokio_rusqlite::Connection;

/// Open the SQLite file backing the document store.
pub async fn async_db(db_path: &str) -> Result<Connection> {
    Connection::open(db_path)
        .await
        .with_context(|| format!("Failed to open db at {}", db_path))
}

/// Create all tables. Safe to run more than once.
pub fn initialize_db(conn: &SqliteConnection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r"
        BEGIN;

        CREATE TABLE IF NOT EXISTS document (
            database TEXT NOT NULL,
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            data TEXT NOT NULL,
            PRIMARY KEY (database, collection, id)
        );

        CREATE TABLE IF NOT EXISTS auth (
            id TEXT PRIMARY KEY,
            service TEXT NOT NULL,
            refresh_token TEXT NOT NULL
        );

        COMMIT;
        ",
    )
}
