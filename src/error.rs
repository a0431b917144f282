//! Error types for pixeldiary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diary
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a pixeldiary directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("No entry for {0}")]
    EntryNotFound(String),

    #[error("Nothing to save: entry content is empty")]
    EmptyContent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::InvalidDate(_) | DiaryError::InvalidMonth(_) => 3,
            DiaryError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a pixeldiary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'pixeldiary init' in this directory to start a diary\n\
                    • Navigate to an existing diary directory\n\
                    • Set PIXELDIARY_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaryError::InvalidDate(input) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Day offsets: +1, -3\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-06-03)\n\n\
                    Examples:\n\
                    pixeldiary show yesterday\n\
                    pixeldiary write 2025-06-03 -m \"...\"",
                    input
                )
            }
            DiaryError::InvalidMonth(input) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Expected format: YYYY-MM\n\
                    Example: pixeldiary calendar 2025-06",
                    input
                )
            }
            DiaryError::EntryNotFound(date) => {
                format!(
                    "No entry for {}\n\n\
                    Suggestions:\n\
                    • Use 'pixeldiary list' to see your entries\n\
                    • Use 'pixeldiary write {}' to start one",
                    date, date
                )
            }
            DiaryError::EmptyContent => "Nothing to save: entry content is empty\n\n\
                Write at least one non-whitespace character."
                .to_string(),
            DiaryError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: pixeldiary config editor 'vim'\n\
                    • Or pass the text directly: pixeldiary write -m \"...\"",
                    msg
                )
            }
            DiaryError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: trace, debug, info, warn, error\n\
                        Example: pixeldiary config log_level info",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;
