use super::backend::{EntryIndex, StorageBackend, StoreLock};
use crate::error::{Result, WikiError};
use fs4::fs_std::FileExt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const INDEX_FILENAME: &str = "index.json";
const LOCK_FILENAME: &str = ".lock";

pub struct FsBackend {
    root: PathBuf,
    file_ext: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".md".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn entry_filename(&self, id: &Uuid) -> String {
        format!("entry-{}{}", id, self.file_ext)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WikiError::Io)?;
        }
        Ok(())
    }

    /// Write through a uniquely named tmp file so readers never see a partial file.
    fn write_atomic(&self, target: &Path, prefix: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp_path = self.root.join(format!(".{}-{}.tmp", prefix, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(WikiError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(WikiError::Io(e));
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn lock(&self) -> Result<StoreLock> {
        self.ensure_dir()?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.root.join(LOCK_FILENAME))
            .map_err(WikiError::Io)?;
        file.lock_exclusive().map_err(WikiError::Io)?;
        Ok(StoreLock::file(file))
    }

    fn load_index(&self) -> Result<EntryIndex> {
        let index_file = self.root.join(INDEX_FILENAME);
        if !index_file.exists() {
            return Ok(EntryIndex::new());
        }
        let content = fs::read_to_string(index_file).map_err(WikiError::Io)?;
        let index: EntryIndex =
            serde_json::from_str(&content).map_err(WikiError::Serialization)?;
        Ok(index)
    }

    fn save_index(&self, index: &EntryIndex) -> Result<()> {
        let content = serde_json::to_string_pretty(index).map_err(WikiError::Serialization)?;
        self.write_atomic(&self.root.join(INDEX_FILENAME), "index", &content)
    }

    fn read_content(&self, id: &Uuid) -> Result<Option<String>> {
        let path = self.root.join(self.entry_filename(id));
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(WikiError::Io)?;
        Ok(Some(content))
    }

    fn write_content(&self, id: &Uuid, content: &str) -> Result<()> {
        let target = self.root.join(self.entry_filename(id));
        self.write_atomic(&target, "entry", content)
    }

    fn delete_content(&self, id: &Uuid) -> Result<()> {
        let path = self.root.join(self.entry_filename(id));
        if path.exists() {
            fs::remove_file(path).map_err(WikiError::Io)?;
        }
        Ok(())
    }
}
