//! Blob storage backends
//!
//! The entry store keeps its whole collection in one blob under a single
//! well-known key. Backends only know how to read and replace that blob.

use crate::error::Result;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key the entry collection is stored under
pub const STORAGE_KEY: &str = "pixelDiary_entries";

/// Read/replace access to a single blob
pub trait BlobStorage {
    /// Current blob bytes, or `None` when nothing has been written yet
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the blob with `bytes`
    fn write(&self, bytes: &[u8]) -> Result<()>;
}

impl<S: BlobStorage + ?Sized> BlobStorage for &S {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }
}

/// Blob kept in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBlobStorage {
    path: PathBuf,
}

impl FileBlobStorage {
    /// Storage for [`STORAGE_KEY`] inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    pub fn with_key(dir: &Path, key: &str) -> Self {
        FileBlobStorage {
            path: dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStorage for FileBlobStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temp file next to the blob, then rename it into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the old blob is removed first.
    fn write(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, bytes)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// In-process blob, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBlobStorage {
    blob: RefCell<Option<Vec<u8>>>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing blob, e.g. a hand-corrupted one
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        MemoryBlobStorage {
            blob: RefCell::new(Some(bytes.into())),
        }
    }

    /// Snapshot of the current blob
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.blob.borrow().clone()
    }
}

impl BlobStorage for MemoryBlobStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        *self.blob.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}
