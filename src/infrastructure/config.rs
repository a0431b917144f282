//! Configuration management

use crate::error::{DiaryError, Result};
use crate::logging::{normalize_level, DEFAULT_LOG_LEVEL};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-diary metadata directory
pub const DIARY_DIR: &str = ".pixeldiary";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub created: DateTime<Utc>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            log_level: default_log_level(),
            created: Utc::now(),
        }
    }

    /// Load config from .pixeldiary/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DIARY_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .pixeldiary/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let diary_dir = path.join(DIARY_DIR);

        if !diary_dir.exists() {
            fs::create_dir(&diary_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(diary_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Get a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "editor" => Ok(self.editor.clone()),
            "log_level" => Ok(self.log_level.clone()),
            "created" => Ok(self.created.to_rfc3339()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, log_level, created",
                key
            ))),
        }
    }

    /// Set a single value by key; `created` is read-only
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor" => {
                if value.trim().is_empty() {
                    return Err(DiaryError::Config("Editor cannot be empty".to_string()));
                }
                self.editor = value.to_string();
            }
            "log_level" => {
                self.log_level = normalize_level(value)?.to_string();
            }
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, log_level",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert!(!config.editor.is_empty());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".pixeldiary/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            DiaryError::NotDiaryDirectory(_) => {}
            other => panic!("Expected NotDiaryDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_log_level_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(DIARY_DIR)).unwrap();
        fs::write(
            temp.path().join(DIARY_DIR).join(CONFIG_FILE),
            "editor = \"vim\"\ncreated = \"2025-06-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, "vim");
        assert_eq!(loaded.log_level, "warn");
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::new();
        config.set("editor", "code -w").unwrap();
        config.set("log_level", "INFO").unwrap();

        assert_eq!(config.get("editor").unwrap(), "code -w");
        assert_eq!(config.get("log_level").unwrap(), "info");
        assert!(config.set("created", "x").is_err());
        assert!(config.set("log_level", "loud").is_err());
        assert!(config.get("mode").is_err());
    }
}
