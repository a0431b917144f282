//! Diary entry model

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Format of the `date` field and of the entry key
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// One diary record for exactly one calendar date.
///
/// Serialized with camelCase field names so that the stored blob keeps the
/// `{ id, date, content, createdAt, updatedAt }` record shape. Only `date`
/// is required when reading; the other fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredEntry")]
pub struct DiaryEntry {
    /// Mirrors `date`; kept only so stored records stay shape-compatible.
    pub id: String,
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record as found in the blob, with every field except `date` optional
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    #[serde(default)]
    id: String,
    date: NaiveDate,
    #[serde(default)]
    content: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<StoredEntry> for DiaryEntry {
    /// Missing timestamps borrow the other one, then midnight UTC of the date.
    /// A missing `id` is the date key.
    fn from(stored: StoredEntry) -> Self {
        let midnight = Utc.from_utc_datetime(&stored.date.and_time(NaiveTime::MIN));
        let created_at = stored.created_at.or(stored.updated_at).unwrap_or(midnight);
        let updated_at = stored.updated_at.unwrap_or(created_at);
        let id = if stored.id.is_empty() {
            date_key(stored.date)
        } else {
            stored.id
        };

        DiaryEntry {
            id,
            date: stored.date,
            content: stored.content,
            created_at,
            updated_at,
        }
    }
}

impl DiaryEntry {
    /// Create a brand new entry, stamping both timestamps with `now`
    pub fn new(date: NaiveDate, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        DiaryEntry {
            id: date_key(date),
            date,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the entry to save for `date`, keeping `created_at` from the
    /// previously stored entry when there is one.
    pub fn revise(
        previous: Option<&DiaryEntry>,
        date: NaiveDate,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut entry = DiaryEntry::new(date, content, now);
        if let Some(prev) = previous {
            entry.created_at = prev.created_at;
        }
        entry
    }

    /// The `YYYY-MM-DD` key of this entry
    pub fn key(&self) -> String {
        date_key(self.date)
    }
}

/// Format a date as an entry key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Whether content is worth saving (at least one non-whitespace character)
pub fn is_savable(content: &str) -> bool {
    !content.trim().is_empty()
}
