use super::backend::StorageBackend;
use super::DocumentKey;
use crate::error::{NotekeepError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the engine is single-writer.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    documents: RefCell<HashMap<DocumentKey, String>>,
    simulate_write_error: RefCell<bool>,
    failing_keys: RefCell<HashSet<DocumentKey>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make writes to a single key fail while other keys keep working.
    /// Used to exercise the write ordering of two-collection operations.
    pub fn fail_writes_to(&self, key: DocumentKey) {
        self.failing_keys.borrow_mut().insert(key);
    }

    pub fn clear_write_failures(&self) {
        *self.simulate_write_error.borrow_mut() = false;
        self.failing_keys.borrow_mut().clear();
    }

    fn check_writable(&self, key: DocumentKey) -> Result<()> {
        if *self.simulate_write_error.borrow() || self.failing_keys.borrow().contains(&key) {
            return Err(NotekeepError::Store(format!(
                "Simulated write error for {}",
                key.name()
            )));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self, key: DocumentKey) -> Result<Option<String>> {
        Ok(self.documents.borrow().get(&key).cloned())
    }

    fn write_document(&self, key: DocumentKey, text: &str) -> Result<()> {
        self.check_writable(key)?;
        self.documents.borrow_mut().insert(key, text.to_string());
        Ok(())
    }

    fn remove_document(&self, key: DocumentKey) -> Result<()> {
        self.check_writable(key)?;
        self.documents.borrow_mut().remove(&key);
        Ok(())
    }
}
