//! List entries use case

use crate::domain::labels::long_date_label;
use crate::domain::query::browse;
use crate::domain::text::{is_truncated, preview, word_count};
use crate::domain::BrowseFilter;
use crate::infrastructure::{BlobStorage, EntryStore};
use chrono::{DateTime, NaiveDate, Utc};

/// One row of the browsing list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub date: NaiveDate,
    /// `Tuesday, June 3, 2025`
    pub heading: String,
    pub updated_at: DateTime<Utc>,
    pub words: usize,
    pub preview: String,
    /// Preview was cut; the full text is only in the single-entry view
    pub truncated: bool,
}

/// Entries matching `filter`, most recent first
pub fn list_entries<S: BlobStorage>(
    store: &EntryStore<S>,
    filter: &BrowseFilter,
) -> Vec<EntrySummary> {
    let entries = store.get_all();

    browse(&entries, filter)
        .into_iter()
        .map(|entry| EntrySummary {
            date: entry.date,
            heading: long_date_label(entry.date),
            updated_at: entry.updated_at,
            words: word_count(&entry.content),
            preview: preview(&entry.content),
            truncated: is_truncated(&entry.content),
        })
        .collect()
}
