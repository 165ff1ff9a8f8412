use super::migrations::{get_db_version, init_with_migrations};
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "reclog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the default data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens (or creates) a database file at `path` and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Connection::open(path.as_ref())?;
        init_with_migrations(&mut conn)?;
        let version = get_db_version(&conn)?;
        tracing::debug!(path = %path.as_ref().display(), version, "database opened");

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
