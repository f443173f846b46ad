//! Listing the trash is also where the retention window is enforced.
//!
//! Every read drops expired entries and entries whose id is back in the live
//! collection (the residue of an interrupted soft delete or restore), and writes
//! the filtered collection back before returning it. A note can therefore vanish
//! between two unrelated reads once its 30 days are up.

use crate::error::Result;
use crate::model::Note;
use crate::retention;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::HashSet;

pub fn run<S: DataStore>(store: &mut S) -> Result<Vec<Note>> {
    run_at(store, Utc::now())
}

pub fn run_at<S: DataStore>(store: &mut S, now: DateTime<Utc>) -> Result<Vec<Note>> {
    let trash = store.load_trash()?;
    if trash.is_empty() {
        return Ok(trash);
    }
    let live_ids: HashSet<String> = store.load_notes()?.into_iter().map(|n| n.id).collect();

    let before = trash.len();
    let mut expired = 0;
    let mut duplicates = 0;
    let kept: Vec<Note> = trash
        .into_iter()
        .filter(|note| {
            if retention::is_expired(note, now) {
                expired += 1;
                false
            } else if live_ids.contains(&note.id) {
                duplicates += 1;
                false
            } else {
                true
            }
        })
        .collect();

    if kept.len() != before {
        store.save_trash(&kept)?;
        if expired > 0 {
            info!("purged {} expired note(s) from trash", expired);
        }
        if duplicates > 0 {
            warn!("dropped {} trash entr(ies) that are also live", duplicates);
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::purge;
    use crate::store::backend::StorageBackend;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DocumentKey;
    use chrono::{Duration, SecondsFormat};

    #[test]
    fn keeps_entries_within_window_in_order() {
        let now = Utc::now();
        let mut store = StoreFixture::new()
            .with_trashed_note("a", "A", now - Duration::days(2))
            .with_trashed_note("b", "B", now - Duration::days(29))
            .with_trashed_note("c", "C", now)
            .store;

        let ids: Vec<_> = run_at(&mut store, now)
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn expiry_boundary() {
        let now = Utc::now();
        let mut store = StoreFixture::new()
            .with_trashed_note(
                "old",
                "Old",
                now - Duration::days(30) - Duration::seconds(1),
            )
            .with_trashed_note("young", "Young", now - Duration::days(29))
            .store;

        let listed = run_at(&mut store, now).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "young");
    }

    #[test]
    fn expired_entries_are_persisted_away() {
        let now = Utc::now();
        let mut store = StoreFixture::new()
            .with_trashed_note("old", "Old", now - Duration::days(45))
            .store;

        assert!(run_at(&mut store, now).unwrap().is_empty());
        assert!(store.load_trash().unwrap().is_empty());
    }

    #[test]
    fn note_expires_between_reads() {
        let deleted = Utc::now();
        let mut store = StoreFixture::new()
            .with_trashed_note("a", "A", deleted)
            .store;

        let early = run_at(&mut store, deleted + Duration::days(10)).unwrap();
        assert_eq!(early.len(), 1);

        let late = run_at(&mut store, deleted + Duration::days(30)).unwrap();
        assert!(late.is_empty());
    }

    #[test]
    fn drops_entries_that_are_also_live() {
        let now = Utc::now();
        let mut store = StoreFixture::new()
            .with_live_note("dup", "Live copy")
            .with_trashed_note("dup", "Trash copy", now)
            .with_trashed_note("t", "Only trash", now)
            .store;

        let listed = run_at(&mut store, now).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "t");
        assert_eq!(store.load_trash().unwrap().len(), 1);
    }

    #[test]
    fn undatable_entry_is_purged_without_blocking_the_rest() {
        let now = Utc::now();
        let fresh = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let doc = format!(
            r#"[
                {{"id":"bad","title":"Bad","content":"","createdAt":"{fresh}","updatedAt":"{fresh}","deletedAt":""}},
                {{"id":"good","title":"Good","content":"","createdAt":"{fresh}","updatedAt":"{fresh}","deletedAt":"{fresh}"}}
            ]"#
        );
        let mut store = InMemoryStore::new();
        store
            .backend
            .write_document(DocumentKey::Trash, &doc)
            .unwrap();

        let listed = run_at(&mut store, now).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "good");

        let stored = store.load_trash().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, "good");

        assert_eq!(purge::empty_at(&mut store, now).unwrap(), 1);
    }

    #[test]
    fn clean_read_does_not_write() {
        let now = Utc::now();
        let mut store = StoreFixture::new()
            .with_trashed_note("a", "A", now)
            .store;
        store.backend.fail_writes_to(DocumentKey::Trash);

        assert_eq!(run_at(&mut store, now).unwrap().len(), 1);
    }

    #[test]
    fn failed_expiry_write_is_an_error() {
        let now = Utc::now();
        let mut store = StoreFixture::new()
            .with_trashed_note("old", "Old", now - Duration::days(40))
            .store;
        store.backend.fail_writes_to(DocumentKey::Trash);

        assert!(run_at(&mut store, now).is_err());
        store.backend.clear_write_failures();
        assert_eq!(store.load_trash().unwrap().len(), 1);
    }
}
