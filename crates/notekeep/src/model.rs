//! # Domain Model
//!
//! This module defines the two persisted record types, [`Note`] and [`Folder`].
//!
//! ## Wire Shape
//!
//! Both types serialize as flat JSON objects with camelCase keys. Optional fields
//! are omitted when absent rather than written as `null`:
//!
//! ```text
//! {
//!   "id": "1714557600000",
//!   "title": "Shopping",
//!   "content": "milk, eggs",
//!   "characterCount": 10,
//!   "createdAt": "2024-05-01T10:00:00.000Z",
//!   "updatedAt": "2024-05-01T10:00:00.000Z",
//!   "folderId": "1714557000000",
//!   "deletedAt": "2024-05-03T08:30:00.000Z"
//! }
//! ```
//!
//! Ids are opaque strings. New records get UUID v4 ids, but documents written by
//! earlier versions (millisecond timestamp ids) load unchanged.
//!
//! ## Character Count
//!
//! `characterCount` is measured in UTF-16 code units, which is what existing
//! documents were written with. It is recomputed on every create and update; see
//! [`character_count`].
//!
//! ## Live vs Trashed
//!
//! `deletedAt` is the only discriminator between the live and the trash
//! collection. The stores keep the two collections disjoint; see
//! [`crate::commands::delete`] and [`crate::commands::restore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Generate a fresh record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Length of `content` in UTF-16 code units.
pub fn character_count(content: &str) -> usize {
    content.encode_utf16().count()
}

/// Reads a timestamp that may be `null`, empty or garbage as `None`.
///
/// One undatable trash entry must not make the whole trash document unreadable.
/// It loads undated and expires on the next trash read.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|text| text.parse::<DateTime<Utc>>().ok()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub character_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        let character_count = character_count(&content);
        Self {
            id: new_id(),
            title,
            content,
            character_count,
            created_at: now,
            updated_at: now,
            color: None,
            folder_id: None,
            deleted_at: None,
        }
    }

    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Recompute `character_count` from `content`.
    /// Returns true if the stored value was wrong.
    pub fn refresh_character_count(&mut self) -> bool {
        let count = character_count(&self.content);
        if self.character_count == count {
            return false;
        }
        self.character_count = count;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(),
            name,
            created_at: Utc::now(),
        }
    }
}
