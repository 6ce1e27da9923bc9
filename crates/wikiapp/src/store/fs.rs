use super::entry_store::WikiStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = WikiStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        WikiStore::with_backend(FsBackend::new(root))
    }

    pub fn with_file_ext(self, ext: &str) -> Self {
        WikiStore::with_backend(self.backend.with_file_ext(ext))
    }

    pub fn file_ext(&self) -> &str {
        self.backend.file_ext()
    }
}
