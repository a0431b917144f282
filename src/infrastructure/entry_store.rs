//! Date-keyed entry store over a single serialized blob
//!
//! Every operation loads the whole collection and every mutation writes the
//! whole collection back. Unreadable blobs are treated as an empty diary and
//! logged; write failures are returned to the caller. Individual records that
//! cannot be read are skipped on load and written back untouched.

use crate::domain::entry::date_key;
use crate::domain::DiaryEntry;
use crate::error::Result;
use crate::infrastructure::storage::BlobStorage;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

/// What the blob currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreHealth {
    /// Nothing stored yet
    Empty,
    /// Blob parsed; `skipped` records could not be read and are kept as-is
    Healthy { entries: usize, skipped: usize },
    /// Blob exists but cannot be read or parsed; reads behave as `Empty`
    Unreadable { reason: String },
}

#[derive(Default)]
struct Collection {
    entries: Vec<DiaryEntry>,
    /// Raw records that failed to parse, in blob order
    unreadable: Vec<Value>,
}

impl Collection {
    /// Drop unreadable records that still name `date`, so a rewrite never
    /// leaves two records for one day.
    fn release(&mut self, date: NaiveDate) {
        let key = date_key(date);
        self.unreadable
            .retain(|raw| raw.get("date").and_then(Value::as_str) != Some(key.as_str()));
    }
}

enum Loaded {
    Missing,
    Parsed(Collection),
    Unreadable(String),
}

/// Entry persistence keyed by calendar date
#[derive(Debug)]
pub struct EntryStore<S: BlobStorage> {
    storage: S,
}

impl<S: BlobStorage> EntryStore<S> {
    pub fn new(storage: S) -> Self {
        EntryStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Insert or replace the entry for `entry.date`.
    ///
    /// Last writer wins; there is no concurrency check.
    pub fn save(&self, entry: &DiaryEntry) -> Result<()> {
        let mut collection = self.collection();
        collection.release(entry.date);

        let entries = &mut collection.entries;
        match entries.iter().position(|e| e.date == entry.date) {
            Some(index) => entries[index] = entry.clone(),
            None => entries.push(entry.clone()),
        }

        self.persist(&collection)?;
        info!(
            "event=entry_saved module=store date={} entries={}",
            entry.key(),
            collection.entries.len()
        );
        Ok(())
    }

    /// The entry for `date`, if any
    pub fn get(&self, date: NaiveDate) -> Option<DiaryEntry> {
        self.get_all().into_iter().find(|e| e.date == date)
    }

    /// Every stored entry in blob order.
    ///
    /// Read and parse failures yield an empty collection and a warning in the log.
    pub fn get_all(&self) -> Vec<DiaryEntry> {
        self.collection().entries
    }

    /// Remove the entry for `date`. Absent dates are a no-op, but the
    /// remaining collection is rewritten either way.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&self, date: NaiveDate) -> Result<bool> {
        let mut collection = self.collection();
        collection.release(date);

        let before = collection.entries.len();
        collection.entries.retain(|e| e.date != date);
        let removed = collection.entries.len() != before;

        self.persist(&collection)?;
        info!(
            "event=entry_deleted module=store date={} removed={}",
            date, removed
        );
        Ok(removed)
    }

    /// Tell an empty diary apart from an unreadable blob
    pub fn health(&self) -> StoreHealth {
        match self.load() {
            Loaded::Missing => StoreHealth::Empty,
            Loaded::Parsed(collection) => StoreHealth::Healthy {
                entries: collection.entries.len(),
                skipped: collection.unreadable.len(),
            },
            Loaded::Unreadable(reason) => StoreHealth::Unreadable { reason },
        }
    }

    fn collection(&self) -> Collection {
        match self.load() {
            Loaded::Missing => Collection::default(),
            Loaded::Parsed(collection) => collection,
            Loaded::Unreadable(reason) => {
                warn!(
                    "event=blob_load_failed module=store status=recovered reason={}",
                    reason
                );
                Collection::default()
            }
        }
    }

    fn load(&self) -> Loaded {
        let bytes = match self.storage.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Loaded::Missing,
            Err(e) => return Loaded::Unreadable(e.to_string()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Loaded::Missing;
        }

        let records = match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(records) => records,
            Err(e) => return Loaded::Unreadable(e.to_string()),
        };

        let mut collection = Collection::default();
        for (index, raw) in records.into_iter().enumerate() {
            match DiaryEntry::deserialize(&raw) {
                Ok(entry) => collection.entries.push(entry),
                Err(e) => {
                    warn!(
                        "event=record_skipped module=store index={} reason={}",
                        index, e
                    );
                    collection.unreadable.push(raw);
                }
            }
        }

        debug!(
            "event=blob_loaded module=store entries={} skipped={} bytes={}",
            collection.entries.len(),
            collection.unreadable.len(),
            bytes.len()
        );
        Loaded::Parsed(collection)
    }

    fn persist(&self, collection: &Collection) -> Result<()> {
        let mut records =
            Vec::with_capacity(collection.entries.len() + collection.unreadable.len());
        for entry in &collection.entries {
            records.push(serde_json::to_value(entry)?);
        }
        records.extend(collection.unreadable.iter().cloned());

        let bytes = serde_json::to_vec(&records)?;
        self.storage.write(&bytes)
    }
}
