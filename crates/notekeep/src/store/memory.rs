use super::doc_store::DocStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = DocStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DocStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Folder, Note};
    use crate::store::DataStore;
    use chrono::{DateTime, Utc};

    /// Builder that seeds an in-memory store directly, bypassing the commands.
    /// Notes are prepended to the live collection like `create` does.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push_live(&mut self, note: Note) {
            let mut notes = self.store.load_notes().unwrap();
            notes.insert(0, note);
            self.store.save_notes(&notes).unwrap();
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = Note::new(
                    format!("Test Note {}", i + 1),
                    format!("Content for note {}", i + 1),
                );
                self.push_live(note);
            }
            self
        }

        pub fn with_live_note(mut self, id: &str, title: &str) -> Self {
            let mut note = Note::new(title.to_string(), "Some content".to_string());
            note.id = id.to_string();
            self.push_live(note);
            self
        }

        pub fn with_filed_note(mut self, id: &str, title: &str, folder_id: &str) -> Self {
            let mut note = Note::new(title.to_string(), "Filed content".to_string());
            note.id = id.to_string();
            note.folder_id = Some(folder_id.to_string());
            self.push_live(note);
            self
        }

        pub fn with_trashed_note(
            mut self,
            id: &str,
            title: &str,
            deleted_at: DateTime<Utc>,
        ) -> Self {
            let mut note = Note::new(title.to_string(), "Deleted content".to_string());
            note.id = id.to_string();
            note.deleted_at = Some(deleted_at);
            let mut trash = self.store.load_trash().unwrap();
            trash.push(note);
            self.store.save_trash(&trash).unwrap();
            self
        }

        pub fn with_folder(mut self, id: &str, name: &str) -> Self {
            let mut folder = Folder::new(name.to_string());
            folder.id = id.to_string();
            let mut folders = self.store.load_folders().unwrap();
            folders.push(folder);
            self.store.save_folders(&folders).unwrap();
            self
        }
    }
}
