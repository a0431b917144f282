//! File system repository

use crate::error::{DiaryError, Result};
use crate::infrastructure::config::DIARY_DIR;
use crate::infrastructure::entry_store::EntryStore;
use crate::infrastructure::storage::FileBlobStorage;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pinning the diary root
pub const ROOT_ENV_VAR: &str = "PIXELDIARY_ROOT";

/// Abstract repository for diary operations
pub trait DiaryRepository {
    /// Get the root directory of this diary
    fn root(&self) -> &Path;

    /// Load configuration from .pixeldiary/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .pixeldiary/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .pixeldiary directory exists
    fn is_initialized(&self) -> bool;

    /// Create .pixeldiary directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the diary root.
    /// `PIXELDIARY_ROOT` wins when set; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_diary_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(DiaryError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'pixeldiary init' in that directory or unset {}.",
                ROOT_ENV_VAR,
                path.display(),
                DIARY_DIR,
                ROOT_ENV_VAR
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the diary root by walking up from `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_diary_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| DiaryError::NotDiaryDirectory(start.to_path_buf()))
    }

    fn has_diary_dir(path: &Path) -> bool {
        path.join(DIARY_DIR).is_dir()
    }

    /// The .pixeldiary directory of this diary
    pub fn diary_dir(&self) -> PathBuf {
        self.root.join(DIARY_DIR)
    }

    /// Entry store backed by the blob inside .pixeldiary
    pub fn entry_store(&self) -> EntryStore<FileBlobStorage> {
        EntryStore::new(FileBlobStorage::in_dir(&self.diary_dir()))
    }

    /// Scratch file the editor works on for `key`
    pub fn draft_path(&self, key: &str) -> PathBuf {
        self.diary_dir().join("drafts").join(format!("{}.md", key))
    }
}

impl DiaryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_diary_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let diary_dir = self.diary_dir();

        if diary_dir.exists() {
            return Err(DiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&diary_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiaryEntry;
    use chrono::{NaiveDate, Utc};
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_initialize_creates_diary_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".pixeldiary").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".pixeldiary")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_diary() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            DiaryError::NotDiaryDirectory(_) => {}
            other => panic!("Expected NotDiaryDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_uses_env_root() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV_VAR);

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".pixeldiary")).unwrap();
        std::env::set_var(ROOT_ENV_VAR, temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_env_root_without_diary_fails() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(ROOT_ENV_VAR);

        let temp = TempDir::new().unwrap();
        std::env::set_var(ROOT_ENV_VAR, temp.path());

        let err = FileSystemRepository::discover().unwrap_err();
        assert!(err.to_string().contains(ROOT_ENV_VAR));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let mut config = Config::new();
        config.editor = "vim".to_string();
        repo.save_config(&config).unwrap();

        assert_eq!(repo.load_config().unwrap().editor, "vim");
    }

    #[test]
    fn test_entry_store_persists_under_diary_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        repo.entry_store()
            .save(&DiaryEntry::new(date, "hello", Utc::now()))
            .unwrap();

        assert!(temp
            .path()
            .join(".pixeldiary")
            .join("pixelDiary_entries.json")
            .exists());
        assert_eq!(repo.entry_store().get(date).unwrap().content, "hello");
    }

    #[test]
    fn test_draft_path() {
        let repo = FileSystemRepository::new(PathBuf::from("/diary"));
        assert_eq!(
            repo.draft_path("2025-06-01"),
            PathBuf::from("/diary/.pixeldiary/drafts/2025-06-01.md")
        );
    }
}
