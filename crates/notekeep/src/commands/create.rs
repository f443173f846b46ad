use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use log::info;

/// Create a note and prepend it to the live collection.
pub fn run<S: DataStore>(store: &mut S, title: String, content: String) -> Result<Note> {
    let note = Note::new(title, content);

    let mut notes = store.load_notes()?;
    notes.insert(0, note.clone());
    store.save_notes(&notes)?;

    info!("created note {}", note.id);
    Ok(note)
}
