use super::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// String key-value store backed by the `storage` table.
///
/// Values are opaque text; callers decide how to encode them.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_db(Db::open_in_memory()?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn get(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn.query_row(SELECT_VALUE, params![key], |row| row.get(0)).optional()
    }

    pub fn set(&mut self, key: &str, value: &str) -> rusqlite::Result<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }
}
