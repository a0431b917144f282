//! Progress statistics and calendar use cases

use crate::domain::{DiaryStats, Month, MonthCalendar};
use crate::infrastructure::{BlobStorage, EntryStore, StoreHealth};
use chrono::NaiveDate;

/// Statistics plus the state of the underlying blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub stats: DiaryStats,
    pub health: StoreHealth,
}

/// Totals, entries in `month` and consistency as of `today`
pub fn diary_stats<S: BlobStorage>(
    store: &EntryStore<S>,
    month: Month,
    today: NaiveDate,
) -> StatsReport {
    let entries = store.get_all();
    StatsReport {
        stats: DiaryStats::compute(&entries, month, today),
        health: store.health(),
    }
}

/// Month grid with entry markers
pub fn month_calendar<S: BlobStorage>(
    store: &EntryStore<S>,
    month: Month,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> MonthCalendar {
    MonthCalendar::build(&store.get_all(), month, today, selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiaryEntry;
    use crate::infrastructure::MemoryBlobStorage;
    use chrono::Utc;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_two_june_entries_count_two() {
        let store = EntryStore::new(MemoryBlobStorage::new());
        store.save(&DiaryEntry::new(d(1), "a", Utc::now())).unwrap();
        store.save(&DiaryEntry::new(d(2), "b", Utc::now())).unwrap();

        let report = diary_stats(&store, Month::new(2025, 6).unwrap(), d(4));
        assert_eq!(report.stats.month_entries, 2);
        assert_eq!(report.stats.total_entries, 2);
        assert_eq!(report.stats.consistency, Some(50));
        assert_eq!(
            report.health,
            StoreHealth::Healthy {
                entries: 2,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_corrupt_store_reports_unreadable() {
        let store = EntryStore::new(MemoryBlobStorage::with_bytes("[{]"));
        let report = diary_stats(&store, Month::new(2025, 6).unwrap(), d(4));

        assert_eq!(report.stats.total_entries, 0);
        assert_eq!(report.stats.consistency, None);
        assert!(matches!(report.health, StoreHealth::Unreadable { .. }));
    }

    #[test]
    fn test_calendar_marks_entries() {
        let store = EntryStore::new(MemoryBlobStorage::new());
        store.save(&DiaryEntry::new(d(9), "a", Utc::now())).unwrap();

        let cal = month_calendar(&store, Month::new(2025, 6).unwrap(), d(10), None);
        let marked: Vec<NaiveDate> = cal.marked_days().map(|c| c.date).collect();
        assert_eq!(marked, vec![d(9)]);
    }
}
