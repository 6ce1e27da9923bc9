use crate::error::Result;
use crate::model::EntryMeta;
use std::collections::HashMap;
use std::fs::File;
use uuid::Uuid;

/// Index of stored entries, keyed by [`crate::model::title_key`].
pub type EntryIndex = HashMap<String, EntryMeta>;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while WikiStore handles the "what" (title normalization, uniqueness).
pub trait StorageBackend {
    // --- Locking ---

    /// Take exclusive hold of the index until the returned guard is dropped.
    /// Writers hold it across load, change and save of the index.
    fn lock(&self) -> Result<StoreLock>;

    // --- Index Operations ---

    /// Load the entry index (index.json)
    fn load_index(&self) -> Result<EntryIndex>;

    /// Save the entry index
    fn save_index(&self, index: &EntryIndex) -> Result<()>;

    // --- Content Operations ---

    /// Read raw content for an entry blob.
    /// Returns Ok(None) if the blob does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_content(&self, id: &Uuid) -> Result<Option<String>>;

    /// Write content to storage.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_content(&self, id: &Uuid, content: &str) -> Result<()>;

    /// Delete a content blob. Missing blobs are not an error.
    fn delete_content(&self, id: &Uuid) -> Result<()>;
}

/// Guard returned by [`StorageBackend::lock`]. Dropping it releases the lock.
pub struct StoreLock {
    _file: Option<File>,
}

impl StoreLock {
    /// A guard for backends that cannot be shared between processes.
    pub fn unshared() -> Self {
        Self { _file: None }
    }

    /// A guard holding a locked file; closing the file releases the lock.
    pub fn file(file: File) -> Self {
        Self { _file: Some(file) }
    }
}
