//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod show_entry;
pub mod stats;
pub mod write_entry;

pub use list_entries::EntrySummary;
pub use manage_config::ConfigService;
pub use show_entry::EntryView;
pub use stats::StatsReport;
pub use write_entry::{SaveOutcome, WriteEntryService};
