use super::backend::BlobBackend;
use crate::error::{Result, WordbookError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory blob backend for testing.
///
/// Uses `RefCell` for interior mutability since wordbook is single-threaded.
/// This keeps `BlobBackend` on `&self` without paying for a lock.
#[derive(Default)]
pub struct MemBackend {
    blobs: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob, as if a previous session had written it.
    pub fn with_blob(self, key: &str, contents: &str) -> Self {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw access to a stored blob.
    pub fn blob(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl BlobBackend for MemBackend {
    fn load_blob(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save_blob(&self, key: &str, contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WordbookError::Store("Simulated write error".to_string()));
        }
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), contents.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
