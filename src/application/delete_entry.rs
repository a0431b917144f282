//! Delete entry use case

use crate::error::Result;
use crate::infrastructure::{BlobStorage, EntryStore};
use chrono::NaiveDate;

/// Remove the entry for `date`; returns whether one existed
pub fn delete_entry<S: BlobStorage>(store: &EntryStore<S>, date: NaiveDate) -> Result<bool> {
    store.delete(date)
}
