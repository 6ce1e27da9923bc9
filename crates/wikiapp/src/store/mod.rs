//! # Storage Layer
//!
//! This module defines the storage abstraction for the wiki. The [`DataStore`]
//! trait is all the request handlers ever see; how entries land on disk (or in
//! memory) is a backend concern.
//!
//! ## Title Identity
//!
//! Titles are case-insensitive: "Python", "python" and "PYTHON" all name the
//! same entry. The store keeps a normalized index mapping the lower-cased
//! title to an [`EntryMeta`](crate::model::EntryMeta) record that remembers
//! the canonical casing of the latest save. Lookups never scan.
//!
//! - `save_entry` overwrites whatever entry shares the key, adopting the new
//!   casing, or creates one.
//! - `get_entry` resolves any case variant to the single stored entry.
//!
//! Refusing to overwrite on create is *policy*, not storage, and lives in
//! [`crate::commands::create`].
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw I/O (index + content blobs).
//! - [`entry_store::WikiStore`]: the `DataStore` implementation over any backend.
//! - [`fs::FileStore`]: production store, `WikiStore<FsBackend>`.
//! - [`memory::InMemoryStore`]: test store, `WikiStore<MemBackend>`.
//!
//! ## Storage Layout
//!
//! ```text
//! <data>/
//! ├── config.json          # Wiki configuration
//! ├── .lock               # Writer lock
//! ├── index.json           # { "<lower title>": EntryMeta }
//! └── entry-{uuid}.md      # Raw markup content
//! ```
//!
//! Every save writes its content to a new blob, then commits by renaming the
//! index into place, then removes the blob it replaced. A failed save leaves
//! the previous entry untouched and a reader never observes a half-written one.
//!
//! ## Concurrency
//!
//! Saves and deletes hold an exclusive advisory lock (`<data>/.lock`, via
//! `fs4`) across the whole load, change and save of the index, so writers in
//! separate processes or threads never drop each other's records. Two saves of
//! the same title still race, and the last one wins. Reads take no lock.

use crate::error::Result;
use crate::model::Entry;

pub mod backend;
pub mod entry_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for entry storage.
pub trait DataStore {
    /// Titles of all entries, sorted and stable between writes
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Get an entry by any case variant of its title
    fn get_entry(&self, title: &str) -> Result<Entry>;

    /// Save an entry (create or overwrite)
    fn save_entry(&mut self, title: &str, content: &str) -> Result<()>;

    /// Delete an entry permanently
    fn delete_entry(&mut self, title: &str) -> Result<()>;
}
