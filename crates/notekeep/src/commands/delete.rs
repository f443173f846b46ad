use super::Outcome;
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use log::info;

/// Soft-delete a live note: stamp `deleted_at` and move it to the trash.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<Outcome<Note>> {
    run_at(store, id, Utc::now())
}

pub fn run_at<S: DataStore>(store: &mut S, id: &str, now: DateTime<Utc>) -> Result<Outcome<Note>> {
    let mut trashed = run_many_at(store, &[id], now)?;
    Ok(trashed.pop().into())
}

/// Soft-delete every live note whose id is in `ids`. Unknown ids are skipped.
pub fn run_many<S: DataStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<Vec<Note>> {
    run_many_at(store, ids, Utc::now())
}

/// The trash is written before the note is removed from live. If the second
/// write fails the note sits in both collections, and listing the trash drops
/// the trash copy again, so a note is never lost.
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

    let live = store.load_notes()?;
    let (mut moving, staying): (Vec<Note>, Vec<Note>) = live
        .into_iter()
        .partition(|n| wanted.contains(&n.id.as_str()));
    if moving.is_empty() {
        return Ok(Vec::new());
    }
    for note in &mut moving {
        note.deleted_at = Some(now);
    }

    // 1. Trash first
    let mut trash = store.load_trash()?;
    trash.retain(|t| !moving.iter().any(|m| m.id == t.id));
    trash.extend(moving.iter().cloned());
    store.save_trash(&trash)?;

    // 2. Then drop from live
    store.save_notes(&staying)?;

    for note in &moving {
        info!("moved note {} to trash", note.id);
    }
    Ok(moving)
}
