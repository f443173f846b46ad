use super::backend::StorageBackend;
use super::DocumentKey;
use crate::error::{NotekeepError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend: one `<key>.json` file per document under a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`, whether or not it exists yet.
    pub fn document_path(&self, key: DocumentKey) -> PathBuf {
        self.root.join(format!("{}.json", key.name()))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotekeepError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self, key: DocumentKey) -> Result<Option<String>> {
        let path = self.document_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path).map_err(NotekeepError::Io)?;
        Ok(Some(text))
    }

    fn write_document(&self, key: DocumentKey, text: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.document_path(key);

        // Atomic write
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", key.name(), Uuid::new_v4()));
        fs::write(&tmp, text).map_err(NotekeepError::Io)?;
        if let Err(err) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(NotekeepError::Io(err));
        }

        debug!("wrote {} ({} bytes)", target.display(), text.len());
        Ok(())
    }

    fn remove_document(&self, key: DocumentKey) -> Result<()> {
        let path = self.document_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(NotekeepError::Io)?;
        }
        Ok(())
    }
}
