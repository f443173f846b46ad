//! # Storage Layer
//!
//! This module defines the storage abstraction for notekeep. The [`DataStore`] trait
//! gives the command layer typed access to the three persisted collections, and
//! [`backend::StorageBackend`] is the raw document medium underneath it.
//!
//! ## Collections
//!
//! State lives in three independently keyed documents, each a plain JSON array of
//! flat objects with no envelope or version field:
//!
//! | Key                  | Contents                                       |
//! |----------------------|------------------------------------------------|
//! | `notes_data`         | Live notes, newest first. Never carry `deletedAt`. |
//! | `deleted_notes_data` | Trashed notes. Always carry `deletedAt`.       |
//! | `folders`            | Folders in creation order.                     |
//!
//! A key that has never been written reads as an empty collection.
//!
//! ## Read-Modify-Write
//!
//! There is no cache and no delta format. Every operation loads the full
//! collection, mutates it in memory, and writes the full collection back. Writes
//! to a single key are atomic (see [`fs_backend::FsBackend`]). Nothing is atomic
//! across keys, so the two operations that touch two collections order their
//! writes so that an interruption duplicates data rather than losing it:
//!
//! - **Soft delete**: trash first, then live.
//! - **Restore**: live first, then trash.
//! - **Folder delete**: unlink notes first, then remove folders.
//!
//! Leftover duplicates are reconciled lazily when the trash is listed, and by
//! [`crate::commands::doctor`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store, one JSON file per key.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── notekeep.toml              # Optional configuration
//! ├── notes_data.json            # Live notes
//! ├── deleted_notes_data.json    # Trash
//! └── folders.json               # Folders
//! ```

use crate::error::Result;
use crate::model::{Folder, Note};

pub mod backend;
pub mod doc_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Names of the persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    Notes,
    Trash,
    Folders,
}

impl DocumentKey {
    pub const ALL: [DocumentKey; 3] = [
        DocumentKey::Notes,
        DocumentKey::Trash,
        DocumentKey::Folders,
    ];

    /// Storage key, shared with documents written by earlier versions.
    pub fn name(self) -> &'static str {
        match self {
            DocumentKey::Notes => "notes_data",
            DocumentKey::Trash => "deleted_notes_data",
            DocumentKey::Folders => "folders",
        }
    }
}

/// Typed access to the persisted collections.
///
/// Loads always return the full collection in stored order; saves replace it.
pub trait DataStore {
    /// Live notes.
    fn load_notes(&self) -> Result<Vec<Note>>;

    fn save_notes(&mut self, notes: &[Note]) -> Result<()>;

    /// Trashed notes, exactly as stored (no expiry filtering at this layer).
    fn load_trash(&self) -> Result<Vec<Note>>;

    fn save_trash(&mut self, notes: &[Note]) -> Result<()>;

    fn load_folders(&self) -> Result<Vec<Folder>>;

    fn save_folders(&mut self, folders: &[Folder]) -> Result<()>;
}
