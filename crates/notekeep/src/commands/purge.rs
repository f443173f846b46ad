use super::{trash, Outcome};
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use log::info;

/// Permanently remove a note from the trash. Live notes are never touched.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<Outcome<Note>> {
    run_at(store, id, Utc::now())
}

pub fn run_at<S: DataStore>(store: &mut S, id: &str, now: DateTime<Utc>) -> Result<Outcome<Note>> {
    let mut purged = run_many_at(store, &[id], now)?;
    Ok(purged.pop().into())
}

pub fn run_many<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<Vec<Note>> {
    run_many_at(store, ids, Utc::now())
}

/// Purge every trashed note whose id is in `ids` with a single write.
/// Unknown ids are ignored, so purging twice is the same as purging once.
pub fn run_many_at<S: DataStore, I: AsRef<str>>(
    store: &mut S,
    ids: &[I],
    now: DateTime<Utc>,
) -> Result<Vec<Note>> {
    let wanted: Vec<&str> = ids
        .iter()
        .map(|id| id.as_ref())
        .filter(|id| !id.is_empty())
        .collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }

    let current = trash::run_at(store, now)?;
    let (purged, kept): (Vec<Note>, Vec<Note>) = current
        .into_iter()
        .partition(|n| wanted.contains(&n.id.as_str()));

    if !purged.is_empty() {
        store.save_trash(&kept)?;
        for note in &purged {
            info!("purged note {}", note.id);
        }
    }
    Ok(purged)
}

/// Purge the whole trash. Returns how many notes were removed.
pub fn empty<S: DataStore>(store: &mut S) -> Result<usize> {
    empty_at(store, Utc::now())
}

pub fn empty_at<S: DataStore>(store: &mut S, now: DateTime<Utc>) -> Result<usize> {
    let current = trash::run_at(store, now)?;
    if current.is_empty() {
        return Ok(0);
    }
    store.save_trash(&[])?;
    info!("emptied trash ({} note(s))", current.len());
    Ok(current.len())
}
