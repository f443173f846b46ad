use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;

/// Folder criterion for listing live notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FolderFilter {
    #[default]
    All,
    /// Notes without a folder.
    Unfiled,
    /// Notes filed in the folder with this id.
    In(String),
}

impl FolderFilter {
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            FolderFilter::All => true,
            FolderFilter::Unfiled => note.folder_id.is_none(),
            FolderFilter::In(id) => note.folder_id.as_deref() == Some(id.as_str()),
        }
    }
}

/// All live notes in stored order (newest first).
pub fn list<S: DataStore>(store: &S) -> Result<Vec<Note>> {
    store.load_notes()
}

pub fn list_filtered<S: DataStore>(store: &S, filter: &FolderFilter) -> Result<Vec<Note>> {
    let notes = store.load_notes()?;
    Ok(notes.into_iter().filter(|n| filter.matches(n)).collect())
}

/// The live note with this id. Trashed notes are not returned.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<Option<Note>> {
    if id.is_empty() {
        return Ok(None);
    }
    let notes = store.load_notes()?;
    Ok(notes.into_iter().find(|n| n.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::Utc;

    #[test]
    fn gets_live_note_by_id() {
        let fixture = StoreFixture::new().with_live_note("a", "Alpha");
        let note = run(&fixture.store, "a").unwrap().unwrap();
        assert_eq!(note.title, "Alpha");
    }

    #[test]
    fn missing_and_empty_ids_are_none() {
        let fixture = StoreFixture::new().with_live_note("a", "Alpha");
        assert!(run(&fixture.store, "zzz").unwrap().is_none());
        assert!(run(&fixture.store, "").unwrap().is_none());
    }

    #[test]
    fn trashed_notes_are_not_visible() {
        let fixture = StoreFixture::new().with_trashed_note("t", "T", Utc::now());
        assert!(run(&fixture.store, "t").unwrap().is_none());
        assert!(list(&fixture.store).unwrap().is_empty());
    }

    #[test]
    fn filters_by_folder() {
        let fixture = StoreFixture::new()
            .with_folder("f1", "Work")
            .with_filed_note("a", "In work", "f1")
            .with_filed_note("b", "Elsewhere", "f2")
            .with_live_note("c", "Loose");

        let all = list_filtered(&fixture.store, &FolderFilter::All).unwrap();
        assert_eq!(all.len(), 3);

        let in_work = FolderFilter::In("f1".into());
        let work = list_filtered(&fixture.store, &in_work).unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].id, "a");

        let unfiled = list_filtered(&fixture.store, &FolderFilter::Unfiled).unwrap();
        assert_eq!(unfiled.len(), 1);
        assert_eq!(unfiled[0].id, "c");
    }
}
