use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalized identity of a title. Two titles name the same entry when their
/// keys are equal.
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}

/// Index record for a stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMeta {
    pub id: Uuid,
    // Canonical casing from the most recent save
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntryMeta {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self) -> String {
        title_key(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub content: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_key_folds_case() {
        assert_eq!(title_key("Python"), "python");
        assert_eq!(title_key("PYTHON"), title_key("python"));
        assert_ne!(title_key("Python"), title_key("Pythons"));
    }

    #[test]
    fn test_meta_key_matches_title_key() {
        let meta = EntryMeta::new("HyperText Markup".to_string());
        assert_eq!(meta.key(), "hypertext markup");
        assert_eq!(meta.created_at, meta.updated_at);
    }
}
