//! Embedded SQLite key-value storage.
//!
//! # Responsibility
//! - Persist document values in a single `content_kv` table.
//! - Bootstrap connections (pragmas + schema) before first use.
//!
//! # Invariants
//! - Bootstrap is idempotent; reopening an existing database is safe.
//! - `save` upserts, so every key holds at most one row.

use super::{validate_key, ContentStorage, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::Duration;

const BOOTSTRAP_SQL: &str = "CREATE TABLE IF NOT EXISTS content_kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// SQLite-backed storage holding one row per key.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) a database file and bootstraps the schema.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::bootstrap(Connection::open(path), "file")
    }

    /// Opens an in-memory database, used by tests and throwaway sessions.
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::bootstrap(Connection::open_in_memory(), "memory")
    }

    fn bootstrap(conn: rusqlite::Result<Connection>, mode: &str) -> StorageResult<Self> {
        let conn = match conn {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={mode} error={err}"
                );
                return Err(err.into());
            }
        };
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(BOOTSTRAP_SQL)?;
        info!("event=storage_open module=storage status=ok mode={mode}");
        Ok(Self { conn })
    }
}

impl ContentStorage for SqliteStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM content_kv WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.conn.execute(
            "INSERT INTO content_kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
