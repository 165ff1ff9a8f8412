//! Core library modules for the reclog application.
//!
//! Everything here is independent of the command-line surface: the record
//! store and its projections can be driven directly from tests or other
//! front ends.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reclog::libs::query::{sort_records, SortKey};
//! use reclog::libs::store::RecordStore;
//!
//! let store = RecordStore::open()?;
//! for record in sort_records(store.list(), SortKey::Date) {
//!     println!("{} {}", record.date, record.title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod query;
pub mod record;
pub mod store;
pub mod transfer;
pub mod view;
