use super::Outcome;
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use chrono::Utc;
use log::info;

/// Replace the live note that has `note.id`.
///
/// `updated_at`, `title`, `content`, `folder_id` and `color` come from the caller.
/// `created_at` is kept from the stored note, `character_count` is recomputed and
/// `deleted_at` is never written into the live collection.
pub fn run<S: DataStore>(store: &mut S, note: Note) -> Result<Outcome<Note>> {
    if note.id.is_empty() {
        return Ok(Outcome::NotFound);
    }

    let mut notes = store.load_notes()?;
    let Some(slot) = notes.iter_mut().find(|n| n.id == note.id) else {
        return Ok(Outcome::NotFound);
    };

    let mut updated = note;
    updated.created_at = slot.created_at;
    updated.deleted_at = None;
    updated.refresh_character_count();
    *slot = updated.clone();

    store.save_notes(&notes)?;
    info!("updated note {}", updated.id);
    Ok(Outcome::Done(updated))
}

/// Change a live note's title and content, stamping `updated_at` with the current time.
/// Everything else (folder, color, creation time) is preserved.
pub fn edit<S: DataStore>(
    store: &mut S,
    id: &str,
    title: String,
    content: String,
) -> Result<Outcome<Note>> {
    let Some(mut note) = super::get::run(store, id)? else {
        return Ok(Outcome::NotFound);
    };
    note.title = title;
    note.content = content;
    note.updated_at = Utc::now();
    run(store, note)
}
