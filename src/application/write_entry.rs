//! Write entry use case

use crate::domain::entry::{date_key, is_savable};
use crate::domain::DiaryEntry;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{BlobStorage, EditorSession, EntryStore, FileSystemRepository};
use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use std::fs;

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub entry: DiaryEntry,
    /// `true` when no entry existed for the date before
    pub created: bool,
}

/// Service for creating and updating the entry of a date
pub struct WriteEntryService<S: BlobStorage> {
    store: EntryStore<S>,
}

impl<S: BlobStorage> WriteEntryService<S> {
    pub fn new(store: EntryStore<S>) -> Self {
        WriteEntryService { store }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Stored content for `date`, empty when there is no entry yet
    pub fn current_content(&self, date: NaiveDate) -> String {
        self.store
            .get(date)
            .map(|e| e.content)
            .unwrap_or_default()
    }

    /// Save `content` as the entry for `date`.
    ///
    /// Whitespace-only content is rejected. An existing entry keeps its
    /// `created_at`; `updated_at` becomes `now`.
    pub fn save(&self, date: NaiveDate, content: &str, now: DateTime<Utc>) -> Result<SaveOutcome> {
        if !is_savable(content) {
            return Err(DiaryError::EmptyContent);
        }

        let previous = self.store.get(date);
        let entry = DiaryEntry::revise(previous.as_ref(), date, content, now);
        self.store.save(&entry)?;

        Ok(SaveOutcome {
            entry,
            created: previous.is_none(),
        })
    }
}

/// Let the user edit `initial` for `date` in their editor and return the result.
///
/// The draft lives under `.pixeldiary/drafts/` only while the editor runs.
pub fn compose_in_editor(
    repository: &FileSystemRepository,
    editor: &EditorSession,
    date: NaiveDate,
    initial: &str,
) -> Result<String> {
    let draft = repository.draft_path(&date_key(date));
    if let Some(parent) = draft.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&draft, initial)?;

    let edited = editor
        .edit(&draft)
        .and_then(|_| fs::read_to_string(&draft).map_err(DiaryError::Io));

    if let Err(e) = fs::remove_file(&draft) {
        warn!(
            "event=draft_cleanup_failed module=app file={} reason={}",
            draft.display(),
            e
        );
    }

    edited.map(strip_trailing_newline)
}

/// Editors terminate the last line; the entry should not grow a newline per edit
fn strip_trailing_newline(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}
