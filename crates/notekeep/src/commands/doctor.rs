use crate::error::Result;
use crate::retention;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::HashSet;

/// Report from the `doctor` operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    /// Trash entries removed because the same id is live.
    pub duplicates_removed: usize,
    /// Live notes that carried a `deletedAt` stamp.
    pub live_flags_cleared: usize,
    /// Trash entries past the retention window.
    pub expired_purged: usize,
    /// Live notes pointing at a folder that no longer exists.
    pub dangling_folder_refs: usize,
    /// Notes whose `characterCount` did not match their content.
    pub character_counts_fixed: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        *self == DoctorReport::default()
    }
}

pub fn run<S: DataStore>(store: &mut S) -> Result<DoctorReport> {
    run_at(store, Utc::now())
}

/// Verify and fix consistency across the three collections.
/// Each collection is written back only if something in it changed.
pub fn run_at<S: DataStore>(store: &mut S, now: DateTime<Utc>) -> Result<DoctorReport> {
    let mut report = DoctorReport::default();

    let mut live = store.load_notes()?;
    let mut trash = store.load_trash()?;
    let folder_ids: HashSet<String> = store.load_folders()?.into_iter().map(|f| f.id).collect();

    // 1. Live notes: no deletedAt, folder must exist, count must match
    let mut live_changed = false;
    for note in live.iter_mut() {
        if note.deleted_at.take().is_some() {
            report.live_flags_cleared += 1;
            live_changed = true;
        }
        if note
            .folder_id
            .as_ref()
            .is_some_and(|fid| !folder_ids.contains(fid))
        {
            note.folder_id = None;
            report.dangling_folder_refs += 1;
            live_changed = true;
        }
        if note.refresh_character_count() {
            report.character_counts_fixed += 1;
            live_changed = true;
        }
    }

    // 2. Trash: disjoint from live, within retention, count must match
    let live_ids: HashSet<&str> = live.iter().map(|n| n.id.as_str()).collect();
    let before = trash.len();
    trash.retain(|note| {
        if live_ids.contains(note.id.as_str()) {
            report.duplicates_removed += 1;
            false
        } else if retention::is_expired(note, now) {
            report.expired_purged += 1;
            false
        } else {
            true
        }
    });
    let mut trash_changed = trash.len() != before;
    for note in trash.iter_mut() {
        if note.refresh_character_count() {
            report.character_counts_fixed += 1;
            trash_changed = true;
        }
    }

    if live_changed {
        store.save_notes(&live)?;
    }
    if trash_changed {
        store.save_trash(&trash)?;
    }

    if report.is_clean() {
        info!("doctor: no inconsistencies found");
    } else {
        warn!("doctor: fixed inconsistencies: {:?}", report);
    }
    Ok(report)
}
