use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{Result, WikiError};
use crate::model::{title_key, Entry, EntryMeta};
use chrono::Utc;
use uuid::Uuid;

pub struct WikiStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> WikiStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Index record for a title, if stored.
    pub fn entry_meta(&self, title: &str) -> Result<Option<EntryMeta>> {
        let index = self.backend.load_index()?;
        Ok(index.get(&title_key(title)).cloned())
    }
}

impl<B: StorageBackend> DataStore for WikiStore<B> {
    fn list_entries(&self) -> Result<Vec<String>> {
        let index = self.backend.load_index()?;
        let mut titles: Vec<String> = index.into_values().map(|meta| meta.title).collect();
        titles.sort();
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Entry> {
        let mut meta = self
            .entry_meta(title)?
            .ok_or_else(|| WikiError::EntryNotFound(title.to_string()))?;

        let mut content = self.backend.read_content(&meta.id)?;
        if content.is_none() {
            // A concurrent save may have replaced the blob after we read the index
            if let Some(current) = self.entry_meta(title)? {
                if current.id != meta.id {
                    content = self.backend.read_content(&current.id)?;
                    meta = current;
                }
            }
        }

        // A missing blob reads as an empty entry
        Ok(Entry {
            title: meta.title,
            content: content.unwrap_or_default(),
        })
    }

    fn save_entry(&mut self, title: &str, content: &str) -> Result<()> {
        let key = title_key(title);
        let _lock = self.backend.lock()?;
        let mut index = self.backend.load_index()?;

        // Every save gets a fresh blob; the index rename is the only commit point
        let previous = index.get(&key).cloned();
        let meta = match &previous {
            Some(existing) => EntryMeta {
                id: Uuid::new_v4(),
                title: title.to_string(),
                updated_at: Utc::now(),
                ..existing.clone()
            },
            None => EntryMeta::new(title.to_string()),
        };

        self.backend.write_content(&meta.id, content)?;

        tracing::debug!(title, id = %meta.id, bytes = content.len(), "saving entry");
        let new_id = meta.id;
        index.insert(key, meta);
        if let Err(e) = self.backend.save_index(&index) {
            if let Err(cleanup) = self.backend.delete_content(&new_id) {
                tracing::warn!(id = %new_id, error = %cleanup, "could not remove uncommitted blob");
            }
            return Err(e);
        }

        if let Some(old) = previous {
            if let Err(e) = self.backend.delete_content(&old.id) {
                tracing::warn!(id = %old.id, error = %e, "could not remove replaced blob");
            }
        }

        Ok(())
    }

    fn delete_entry(&mut self, title: &str) -> Result<()> {
        let _lock = self.backend.lock()?;
        let mut index = self.backend.load_index()?;
        let meta = index
            .remove(&title_key(title))
            .ok_or_else(|| WikiError::EntryNotFound(title.to_string()))?;
        self.backend.save_index(&index)?;

        self.backend.delete_content(&meta.id)?;
        tracing::debug!(title = %meta.title, id = %meta.id, "deleted entry");

        Ok(())
    }
}
