use super::{trash, Outcome};
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use log::info;

/// Move a trashed note back to the front of the live collection.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<Outcome<Note>> {
    run_at(store, id, Utc::now())
}

/// Expired notes cannot be restored; the trash is read with expiry applied first.
/// If the note's folder was deleted while it sat in the trash, it comes back unfiled.
///
/// Live is written before the trash so an interrupted restore leaves a
/// duplicate, which the next trash read drops, rather than losing the note.
pub fn run_at<S: DataStore>(store: &mut S, id: &str, now: DateTime<Utc>) -> Result<Outcome<Note>> {
    if id.is_empty() {
        return Ok(Outcome::NotFound);
    }

    let mut trashed = trash::run_at(store, now)?;
    let Some(pos) = trashed.iter().position(|n| n.id == id) else {
        return Ok(Outcome::NotFound);
    };
    let mut note = trashed.remove(pos);
    note.deleted_at = None;

    if let Some(folder_id) = note.folder_id.as_deref() {
        let folders = store.load_folders()?;
        if !folders.iter().any(|f| f.id == folder_id) {
            note.folder_id = None;
        }
    }

    // 1. Live first
    let mut live = store.load_notes()?;
    live.retain(|n| n.id != note.id);
    live.insert(0, note.clone());
    store.save_notes(&live)?;

    // 2. Then drop from trash
    store.save_trash(&trashed)?;

    info!("restored note {}", note.id);
    Ok(Outcome::Done(note))
}
