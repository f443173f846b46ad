//! # Retention Window
//!
//! Trashed notes are kept for a fixed [`RETENTION_DAYS`] after `deletedAt` and
//! are then purged the next time the trash is read.
//!
//! A note is expired once `now - deleted_at >= 30 days`. A trashed note without
//! a `deletedAt` stamp cannot be dated and counts as expired.
//!
//! [`remaining_days`] is purely informational. It never triggers a purge.

use chrono::{DateTime, Duration, Utc};

use crate::model::Note;

pub const RETENTION_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub fn retention_window() -> Duration {
    Duration::days(RETENTION_DAYS)
}

/// The instant at which a note deleted at `deleted_at` stops being restorable.
pub fn expires_at(deleted_at: DateTime<Utc>) -> DateTime<Utc> {
    deleted_at + retention_window()
}

pub fn is_expired(note: &Note, now: DateTime<Utc>) -> bool {
    match note.deleted_at {
        Some(deleted_at) => now - deleted_at >= retention_window(),
        None => true,
    }
}

/// Whole days left before expiry, rounded up. Zero or negative once expired.
pub fn remaining_days(deleted_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expires_at(deleted_at) - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trashed(deleted_at: DateTime<Utc>) -> Note {
        let mut note = Note::new("T".into(), "".into());
        note.deleted_at = Some(deleted_at);
        note
    }

    #[test]
    fn expires_thirty_days_after_deletion() {
        let deleted = Utc::now();
        assert_eq!(expires_at(deleted) - deleted, Duration::days(30));
    }

    #[test]
    fn expiry_boundary() {
        let now = Utc::now();
        assert!(is_expired(
            &trashed(now - Duration::days(30) - Duration::seconds(1)),
            now
        ));
        assert!(is_expired(&trashed(now - Duration::days(30)), now));
        assert!(!is_expired(&trashed(now - Duration::days(29)), now));
        assert!(!is_expired(&trashed(now), now));
    }

    #[test]
    fn undated_trash_entry_is_expired() {
        let note = Note::new("T".into(), "".into());
        assert!(is_expired(&note, Utc::now()));
    }

    #[test]
    fn remaining_days_rounds_up() {
        let now = Utc::now();
        assert_eq!(remaining_days(now, now), 30);
        assert_eq!(remaining_days(now - Duration::hours(1), now), 30);
        assert_eq!(remaining_days(now - Duration::days(1), now), 29);
        assert_eq!(
            remaining_days(now - Duration::days(29) - Duration::hours(23), now),
            1
        );
    }

    #[test]
    fn remaining_days_after_expiry() {
        let now = Utc::now();
        assert_eq!(remaining_days(now - Duration::days(30), now), 0);
        assert_eq!(remaining_days(now - Duration::days(32), now), -2);
        assert_eq!(
            remaining_days(now - Duration::days(31) - Duration::hours(12), now),
            -1
        );
    }
}
