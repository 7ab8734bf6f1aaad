use super::backend::BlobBackend;
use crate::error::{Result, WordbookError};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem blob backend: each key maps to `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WordbookError::Io)?;
        }
        Ok(())
    }
}

impl BlobBackend for FsBackend {
    fn load_blob(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(WordbookError::Io)?;
        Ok(Some(contents))
    }

    fn save_blob(&self, key: &str, contents: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.blob_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, contents).map_err(WordbookError::Io)?;
        fs::rename(&tmp, target).map_err(WordbookError::Io)?;

        Ok(())
    }
}
