use crate::error::Result;
use crate::model::Folder;
use crate::store::DataStore;
use log::info;

/// Report from [`delete_many`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FolderDeletion {
    pub folders_removed: usize,
    pub notes_unlinked: usize,
}

pub fn list<S: DataStore>(store: &S) -> Result<Vec<Folder>> {
    store.load_folders()
}

/// Create a folder named `name` (trimmed). Blank names are ignored and return `None`.
pub fn create<S: DataStore>(store: &mut S, name: &str) -> Result<Option<Folder>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let folder = Folder::new(name.to_string());
    let mut folders = store.load_folders()?;
    folders.push(folder.clone());
    store.save_folders(&folders)?;

    info!("created folder {}", folder.id);
    Ok(Some(folder))
}

/// Delete the folders in `ids` and unfile every live note that referenced them.
///
/// Notes are unlinked before the folders are removed: if the second write
/// fails the folders still exist and no note points at a missing folder.
/// Trashed notes keep their folder id; restore clears it if the folder is gone.
pub fn delete_many<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    ids: &[I],
) -> Result<FolderDeletion> {
    let doomed: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
    let mut report = FolderDeletion::default();
    if doomed.is_empty() {
        return Ok(report);
    }

    // 1. Unlink notes
    let mut notes = store.load_notes()?;
    for note in notes.iter_mut() {
        if note
            .folder_id
            .as_deref()
            .is_some_and(|fid| doomed.contains(&fid))
        {
            note.folder_id = None;
            report.notes_unlinked += 1;
        }
    }
    if report.notes_unlinked > 0 {
        store.save_notes(&notes)?;
    }

    // 2. Remove folders
    let mut folders = store.load_folders()?;
    let before = folders.len();
    folders.retain(|f| !doomed.contains(&f.id.as_str()));
    report.folders_removed = before - folders.len();
    if report.folders_removed > 0 {
        store.save_folders(&folders)?;
    }

    info!(
        "deleted {} folder(s), unlinked {} note(s)",
        report.folders_removed, report.notes_unlinked
    );
    Ok(report)
}
