//! Show entry use case

use crate::domain::date_ref::{next_day, previous_day};
use crate::domain::labels::relative_label;
use crate::domain::text::{char_count, word_count, writing_tip};
use crate::domain::DiaryEntry;
use crate::infrastructure::{BlobStorage, EntryStore};
use chrono::NaiveDate;

/// Everything the single-entry view displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub entry: DiaryEntry,
    /// `Today`, `Yesterday` or `June 3, 2025`
    pub label: String,
    pub words: usize,
    pub chars: usize,
    pub tip: &'static str,
    /// Neighbouring days to step to
    pub previous: Option<NaiveDate>,
    pub next: Option<NaiveDate>,
}

impl EntryView {
    pub fn new(entry: DiaryEntry, today: NaiveDate) -> Self {
        let words = word_count(&entry.content);
        EntryView {
            label: relative_label(entry.date, today),
            words,
            chars: char_count(&entry.content),
            tip: writing_tip(words),
            previous: previous_day(entry.date),
            next: next_day(entry.date),
            entry,
        }
    }
}

/// Load the entry for `date` and decorate it for display
pub fn show_entry<S: BlobStorage>(
    store: &EntryStore<S>,
    date: NaiveDate,
    today: NaiveDate,
) -> Option<EntryView> {
    store.get(date).map(|entry| EntryView::new(entry, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryBlobStorage;
    use chrono::Utc;

    #[test]
    fn test_show_decorates_entry() {
        let store = EntryStore::new(MemoryBlobStorage::new());
        let today = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        store
            .save(&DiaryEntry::new(yesterday, "ab c", Utc::now()))
            .unwrap();

        let view = show_entry(&store, yesterday, today).unwrap();
        assert_eq!(view.label, "Yesterday");
        assert_eq!(view.words, 2);
        assert_eq!(view.chars, 4);
        assert!(view.tip.contains("great start"));
        assert_eq!(view.previous, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(view.next, Some(today));
    }

    #[test]
    fn test_show_missing_is_none() {
        let store = EntryStore::new(MemoryBlobStorage::new());
        let today = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert!(show_entry(&store, today, today).is_none());
    }
}
