use super::backend::{EntryIndex, StorageBackend, StoreLock};
use crate::error::{Result, WikiError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability so the `StorageBackend` trait can
/// take `&self` everywhere, matching the stateless filesystem backend.
#[derive(Default)]
pub struct MemBackend {
    index: RefCell<EntryIndex>,
    content: RefCell<HashMap<Uuid, String>>,
    simulate_write_error: Cell<bool>,
    simulate_index_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Fail only index saves, leaving content writes working.
    pub fn set_simulate_index_error(&self, simulate: bool) {
        self.simulate_index_error.set(simulate);
    }

    /// Number of content blobs currently held.
    pub fn content_count(&self) -> usize {
        self.content.borrow().len()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(WikiError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn lock(&self) -> Result<StoreLock> {
        Ok(StoreLock::unshared())
    }

    fn load_index(&self) -> Result<EntryIndex> {
        Ok(self.index.borrow().clone())
    }

    fn save_index(&self, index: &EntryIndex) -> Result<()> {
        self.check_writable()?;
        if self.simulate_index_error.get() {
            return Err(WikiError::Store("Simulated index write error".to_string()));
        }
        *self.index.borrow_mut() = index.clone();
        Ok(())
    }

    fn read_content(&self, id: &Uuid) -> Result<Option<String>> {
        Ok(self.content.borrow().get(id).cloned())
    }

    fn write_content(&self, id: &Uuid, text: &str) -> Result<()> {
        self.check_writable()?;
        self.content.borrow_mut().insert(*id, text.to_string());
        Ok(())
    }

    fn delete_content(&self, id: &Uuid) -> Result<()> {
        self.check_writable()?;
        self.content.borrow_mut().remove(id);
        Ok(())
    }
}
