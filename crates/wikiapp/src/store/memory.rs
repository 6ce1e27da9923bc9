use super::entry_store::WikiStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = WikiStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        WikiStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, title: &str, content: &str) -> Self {
            self.store.save_entry(title, content).unwrap();
            self
        }

        /// The classic starter set: CSS, Django, Git, HTML, Python.
        pub fn with_encyclopedia(self) -> Self {
            self.with_entry("CSS", "# CSS\n\nCSS is a language for styling pages.")
                .with_entry("Django", "# Django\n\nDjango is a web framework.")
                .with_entry("Git", "# Git\n\nGit is a version control tool.")
                .with_entry("HTML", "# HTML\n\nHTML is a markup language.")
                .with_entry("Python", "# Python\n\nPython is a programming language.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::error::WikiError;
    use crate::store::DataStore;

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn test_list_is_sorted_and_stable() {
        let fixture = StoreFixture::new()
            .with_entry("Python", "")
            .with_entry("CSS", "")
            .with_entry("HTML", "");

        let first = fixture.store.list_entries().unwrap();
        let second = fixture.store.list_entries().unwrap();
        assert_eq!(first, vec!["CSS", "HTML", "Python"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_case_variants_resolve_to_one_entry() {
        let mut store = InMemoryStore::new();
        store.save_entry("Python", "v1").unwrap();
        store.save_entry("PYTHON", "v2").unwrap();

        assert_eq!(store.list_entries().unwrap(), vec!["PYTHON"]);
        let entry = store.get_entry("python").unwrap();
        assert_eq!(entry.title, "PYTHON");
        assert_eq!(entry.content, "v2");
        assert_eq!(store.backend().content_count(), 1);
    }

    #[test]
    fn test_empty_content_round_trips() {
        let mut store = InMemoryStore::new();
        store.save_entry("Blank", "").unwrap();
        assert_eq!(store.get_entry("blank").unwrap().content, "");
    }

    #[test]
    fn test_overwrite_keeps_created_at() {
        let mut store = InMemoryStore::new();
        store.save_entry("Git", "a").unwrap();
        let before = store.entry_meta("Git").unwrap().unwrap();
        store.save_entry("git", "b").unwrap();
        let after = store.entry_meta("Git").unwrap().unwrap();

        assert_ne!(before.id, after.id);
        assert_eq!(before.created_at, after.created_at);
        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.title, "git");
    }

    #[test]
    fn test_simulated_write_error_propagates() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);

        let err = store.save_entry("Git", "content").unwrap_err();
        assert!(matches!(err, WikiError::Store(_)));
        assert!(err.is_fatal());

        store.backend().set_simulate_write_error(false);
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn test_failed_index_save_keeps_previous_entry() {
        let mut store = InMemoryStore::new();
        store.save_entry("Git", "old").unwrap();

        store.backend().set_simulate_index_error(true);
        let err = store.save_entry("GIT", "new").unwrap_err();
        assert!(err.is_fatal());
        store.backend().set_simulate_index_error(false);

        let entry = store.get_entry("git").unwrap();
        assert_eq!(entry.title, "Git");
        assert_eq!(entry.content, "old");
        assert_eq!(store.backend().content_count(), 1);
    }

    #[test]
    fn test_failed_create_leaves_no_blob() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_index_error(true);

        assert!(store.save_entry("Rust", "x").is_err());
        store.backend().set_simulate_index_error(false);

        assert!(store.list_entries().unwrap().is_empty());
        assert_eq!(store.backend().content_count(), 0);
    }

    #[test]
    fn test_delete_not_found() {
        let mut store = InMemoryStore::new();
        match store.delete_entry("ghost") {
            Err(WikiError::EntryNotFound(title)) => assert_eq!(title, "ghost"),
            _ => panic!("Expected EntryNotFound"),
        }
    }

    #[test]
    fn test_fixture_encyclopedia() {
        let fixture = StoreFixture::default().with_encyclopedia();
        assert_eq!(
            fixture.store.list_entries().unwrap(),
            vec!["CSS", "Django", "Git", "HTML", "Python"]
        );
    }
}
