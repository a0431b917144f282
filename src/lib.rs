//! pixeldiary - personal journal kept on the local device
//!
//! One entry per calendar date, persisted as a single JSON blob inside the
//! diary's `.pixeldiary` directory, plus pure helpers that turn the loaded
//! entries into lists, labels, counts and calendars.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DiaryError;
