use super::Outcome;
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use log::info;

/// File a live note into `folder_id`, or unfile it with `None`.
///
/// The folder id is not checked against the folder collection.
pub fn run<S: DataStore>(
    store: &mut S,
    id: &str,
    folder_id: Option<&str>,
) -> Result<Outcome<Note>> {
    if id.is_empty() {
        return Ok(Outcome::NotFound);
    }
    let mut notes = store.load_notes()?;
    let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
        return Ok(Outcome::NotFound);
    };
    note.folder_id = folder_id.map(str::to_string);
    let moved = note.clone();

    store.save_notes(&notes)?;
    info!("moved note {} to folder {:?}", moved.id, folder_id);
    Ok(Outcome::Done(moved))
}

/// Batch form of [`run`] with a single write. Returns how many notes were moved.
pub fn run_many<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    ids: &[I],
    folder_id: Option<&str>,
) -> Result<usize> {
    let wanted: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
    let mut notes = store.load_notes()?;

    let mut moved = 0;
    for note in notes.iter_mut().filter(|n| wanted.contains(&n.id.as_str())) {
        note.folder_id = folder_id.map(str::to_string);
        moved += 1;
    }

    if moved > 0 {
        store.save_notes(&notes)?;
        info!("moved {} note(s) to folder {:?}", moved, folder_id);
    }
    Ok(moved)
}
