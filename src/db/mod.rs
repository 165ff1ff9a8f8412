//! Database layer for the reclog application.
//!
//! reclog persists its whole record collection as one JSON document under a
//! single key, so the database is a small SQLite key-value store rather than
//! a relational schema.
//!
//! ```rust,no_run
//! use reclog::db::kv_store::KvStore;
//!
//! let mut kv = KvStore::new()?;
//! kv.set("records", "[]")?;
//! assert_eq!(kv.get("records")?.as_deref(), Some("[]"));
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup: resolves the database file and applies migrations.
pub mod db;

/// Key-value access to the `storage` table.
pub mod kv_store;

/// Versioned schema changes for the storage table.
pub mod migrations;
