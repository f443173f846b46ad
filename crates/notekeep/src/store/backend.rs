use super::DocumentKey;
use crate::error::Result;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocStore handles the "what" (typed collections, JSON shape).
pub trait StorageBackend {
    /// Read the raw JSON text stored under `key`.
    /// Returns Ok(None) if nothing has been written under that key yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_document(&self, key: DocumentKey) -> Result<Option<String>>;

    /// Replace the document stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename): a failed write leaves
    /// the previous document intact.
    fn write_document(&self, key: DocumentKey, text: &str) -> Result<()>;

    /// Remove the document stored under `key`. Removing a missing key is not an error.
    fn remove_document(&self, key: DocumentKey) -> Result<()>;
}
