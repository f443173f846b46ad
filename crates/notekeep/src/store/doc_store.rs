use super::backend::StorageBackend;
use super::{DataStore, DocumentKey};
use crate::error::{NotekeepError, Result};
use crate::model::{Folder, Note};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct DocStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    pretty: bool,
}

impl<B: StorageBackend> DocStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            pretty: false,
        }
    }

    /// Pretty-print documents on write. Reading accepts either form.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn load<T: DeserializeOwned>(&self, key: DocumentKey) -> Result<Vec<T>> {
        let Some(text) = self.backend.read_document(key)? else {
            return Ok(Vec::new());
        };
        // An empty document is an empty collection
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<T> = serde_json::from_str(&text)?;
        debug!("loaded {} ({} entries)", key.name(), items.len());
        Ok(items)
    }

    fn save<T: Serialize>(&self, key: DocumentKey, items: &[T]) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(items)
        } else {
            serde_json::to_string(items)
        }
        .map_err(NotekeepError::Serialization)?;
        self.backend.write_document(key, &text)?;
        debug!("saved {} ({} entries)", key.name(), items.len());
        Ok(())
    }
}

impl<B: StorageBackend> DataStore for DocStore<B> {
    fn load_notes(&self) -> Result<Vec<Note>> {
        self.load(DocumentKey::Notes)
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.save(DocumentKey::Notes, notes)
    }

    fn load_trash(&self) -> Result<Vec<Note>> {
        self.load(DocumentKey::Trash)
    }

    fn save_trash(&mut self, notes: &[Note]) -> Result<()> {
        self.save(DocumentKey::Trash, notes)
    }

    fn load_folders(&self) -> Result<Vec<Folder>> {
        self.load(DocumentKey::Folders)
    }

    fn save_folders(&mut self, folders: &[Folder]) -> Result<()> {
        self.save(DocumentKey::Folders, folders)
    }
}
