//! Filtering and ordering of loaded entries

use crate::domain::entry::DiaryEntry;
use crate::domain::labels::date_label;
use chrono::NaiveDate;

/// Whether any entry exists for `date`
pub fn has_entry(entries: &[DiaryEntry], date: NaiveDate) -> bool {
    entries.iter().any(|e| e.date == date)
}

/// Case-insensitive substring match against the content or the `June 3, 2025` label.
/// An empty query matches every entry.
pub fn matches_search(entry: &DiaryEntry, query: &str) -> bool {
    let needle = query.to_lowercase();
    entry.content.to_lowercase().contains(&needle)
        || date_label(entry.date).to_lowercase().contains(&needle)
}

/// Entries matching `query`, in their original order
pub fn search<'a>(entries: &'a [DiaryEntry], query: &str) -> Vec<&'a DiaryEntry> {
    entries.iter().filter(|e| matches_search(e, query)).collect()
}

/// Most recent date first
pub fn sort_recent_first(entries: &mut [&DiaryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Oldest date first
pub fn sort_chronological(entries: &mut [&DiaryEntry]) {
    entries.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Criteria for the browsing list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseFilter {
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// Apply search and date range, sort most recent first, then truncate to the limit
pub fn browse<'a>(entries: &'a [DiaryEntry], filter: &BrowseFilter) -> Vec<&'a DiaryEntry> {
    let mut selected: Vec<&DiaryEntry> = entries
        .iter()
        .filter(|e| filter.search.as_deref().is_none_or(|q| matches_search(e, q)))
        .filter(|e| filter.from.is_none_or(|from| e.date >= from))
        .filter(|e| filter.to.is_none_or(|to| e.date <= to))
        .collect();

    sort_recent_first(&mut selected);

    if let Some(n) = filter.limit {
        selected.truncate(n);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(date: &str, content: &str) -> DiaryEntry {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        DiaryEntry::new(
            date,
            content,
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        )
    }

    fn sample() -> Vec<DiaryEntry> {
        vec![
            entry("2025-06-03", "Walked the dog"),
            entry("2025-05-20", "Rainy day, read a BOOK"),
            entry("2025-06-10", "Coffee with Sam"),
        ]
    }

    #[test]
    fn test_has_entry() {
        let entries = sample();
        assert!(has_entry(&entries, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()));
        assert!(!has_entry(&entries, NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()));
    }

    #[test]
    fn test_search_content_case_insensitive() {
        let entries = sample();
        let hits = search(&entries, "book");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key(), "2025-05-20");
    }

    #[test]
    fn test_search_matches_date_label() {
        let entries = sample();
        let hits = search(&entries, "June");
        let keys: Vec<String> = hits.iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["2025-06-03", "2025-06-10"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let entries = sample();
        assert_eq!(search(&entries, "").len(), 3);
    }

    #[test]
    fn test_sorts() {
        let entries = sample();
        let mut refs: Vec<&DiaryEntry> = entries.iter().collect();

        sort_recent_first(&mut refs);
        assert_eq!(refs[0].key(), "2025-06-10");
        assert_eq!(refs[2].key(), "2025-05-20");

        sort_chronological(&mut refs);
        assert_eq!(refs[0].key(), "2025-05-20");
        assert_eq!(refs[2].key(), "2025-06-10");
    }

    #[test]
    fn test_browse_applies_range_and_limit() {
        let entries = sample();
        let filter = BrowseFilter {
            from: NaiveDate::from_ymd_opt(2025, 6, 1),
            limit: Some(1),
            ..BrowseFilter::default()
        };
        let hits = browse(&entries, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key(), "2025-06-10");
    }

    #[test]
    fn test_browse_search_and_to() {
        let entries = sample();
        let filter = BrowseFilter {
            search: Some("june".to_string()),
            to: NaiveDate::from_ymd_opt(2025, 6, 5),
            ..BrowseFilter::default()
        };
        let hits = browse(&entries, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key(), "2025-06-03");
    }
}
