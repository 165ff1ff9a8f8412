//! The record store: one owned collection mirrored to persistent storage.
//!
//! Every mutation writes the whole collection back to the key-value store
//! before returning. If that write fails the in-memory collection is restored
//! and the error is returned, so memory and disk never disagree.
//!
//! ```rust
//! use reclog::db::kv_store::KvStore;
//! use reclog::libs::record::RecordInput;
//! use reclog::libs::store::RecordStore;
//!
//! let mut store = RecordStore::load(KvStore::open_in_memory()?)?;
//! let record = store.create(&RecordInput::new("Lab report", "2025-03-02").duration("2"))?;
//! assert_eq!(store.get(&record.id).map(|r| r.duration), Some(2.0));
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::error::{RecordError, RecordResult};
use super::record::{advance_timestamp, now_timestamp, parse_records, Record, RecordInput};
use crate::db::kv_store::KvStore;
use anyhow::Result;
use chrono::Utc;

/// Storage key holding the JSON array of records.
pub const RECORDS_KEY: &str = "records";
pub const ID_PREFIX: &str = "rec_";

pub struct RecordStore {
    records: Vec<Record>,
    kv: KvStore,
}

impl RecordStore {
    /// Opens the store from the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::load(KvStore::new()?)?)
    }

    /// Loads the collection from `kv`. A missing key is an empty collection.
    pub fn load(kv: KvStore) -> RecordResult<Self> {
        let records = match kv.get(RECORDS_KEY)? {
            Some(blob) => parse_records(&blob)?,
            None => Vec::new(),
        };
        tracing::debug!(count = records.len(), "records loaded");

        Ok(Self { records, kv })
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn create(&mut self, input: &RecordInput) -> RecordResult<Record> {
        let fields = input.validate()?;
        let now = now_timestamp();

        let mut record = Record {
            id: self.generate_id(),
            created_at: now.clone(),
            updated_at: now,
            ..Record::default()
        };
        record.apply(fields);

        let previous = self.records.clone();
        self.records.push(record.clone());
        self.persist_or_restore(previous)?;

        tracing::debug!(id = %record.id, "record created");
        Ok(record)
    }

    /// Overwrites the mutable fields of record `id`, keeping its id and creation time.
    pub fn update(&mut self, id: &str, input: &RecordInput) -> RecordResult<Record> {
        let index = self.position(id).ok_or_else(|| RecordError::NotFound(id.to_string()))?;
        let fields = input.validate()?;

        let previous = self.records.clone();
        let record = &mut self.records[index];
        record.apply(fields);
        record.updated_at = advance_timestamp(&record.updated_at);
        let updated = record.clone();
        self.persist_or_restore(previous)?;

        tracing::debug!(id = %updated.id, "record updated");
        Ok(updated)
    }

    /// Removes record `id`. Returns `None`, without writing, when it does not exist.
    pub fn delete(&mut self, id: &str) -> RecordResult<Option<Record>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let previous = self.records.clone();
        let removed = self.records.remove(index);
        self.persist_or_restore(previous)?;

        tracing::debug!(id = %removed.id, "record deleted");
        Ok(Some(removed))
    }

    /// Replaces the whole collection. Records are stored exactly as given.
    pub fn replace_all(&mut self, records: Vec<Record>) -> RecordResult<()> {
        let previous = std::mem::replace(&mut self.records, records);
        self.persist_or_restore(previous)?;

        tracing::debug!(count = self.records.len(), "records replaced");
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// `rec_<unix millis>`, bumped until no existing record uses it.
    fn generate_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = format!("{}{}", ID_PREFIX, millis);
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    fn persist(&mut self) -> RecordResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.kv.set(RECORDS_KEY, &blob)?;
        Ok(())
    }

    fn persist_or_restore(&mut self, previous: Vec<Record>) -> RecordResult<()> {
        if let Err(e) = self.persist() {
            self.records = previous;
            return Err(e);
        }
        Ok(())
    }
}
