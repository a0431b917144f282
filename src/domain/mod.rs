//! Domain layer - Entry model and pure view-model computations

pub mod calendar;
pub mod date_ref;
pub mod entry;
pub mod labels;
pub mod query;
pub mod text;

pub use calendar::{calendar_target, DiaryStats, Month, MonthCalendar};
pub use date_ref::DateReference;
pub use entry::DiaryEntry;
pub use query::BrowseFilter;
