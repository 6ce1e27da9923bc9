//! Form schemas and validation.
//!
//! Each form is a plain struct with an explicit [`Form::validate`] that turns
//! raw submitted fields into either the typed value or the list of every field
//! that failed. Nothing here knows how a form is drawn.
//!
//! ## Rules
//!
//! [`EntryForm`]:
//! - `title` is required and must not be blank. It is trimmed, at most
//!   [`MAX_TITLE_CHARS`] characters, and free of control characters.
//! - `content` is required but may be empty. `\r\n` is normalized to `\n`.
//!
//! [`SearchForm`]:
//! - `q` is required. The empty string is a valid query.

use std::collections::BTreeMap;
use std::fmt;

pub const MAX_TITLE_CHARS: usize = 200;

/// Raw submitted form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found while validating one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl From<Vec<FieldError>> for FormErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

pub trait Form: Sized {
    fn validate(data: &FormData) -> Result<Self, FormErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub content: String,
}

impl Form for EntryForm {
    fn validate(data: &FormData) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::default();

        let title = match data.get("title") {
            None => {
                errors.push(FieldError::new("title", "This field is required."));
                None
            }
            Some(raw) => match validate_title(raw) {
                Ok(title) => Some(title),
                Err(message) => {
                    errors.push(FieldError::new("title", message));
                    None
                }
            },
        };

        let content = match data.get("content") {
            None => {
                errors.push(FieldError::new("content", "This field is required."));
                None
            }
            Some(raw) => Some(raw.replace("\r\n", "\n")),
        };

        match (title, content) {
            (Some(title), Some(content)) => Ok(EntryForm { title, content }),
            _ => Err(errors),
        }
    }
}

/// Checks a submitted title, returning it trimmed.
pub fn validate_title(raw: &str) -> Result<String, String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err("This field is required.".to_string());
    }
    let len = title.chars().count();
    if len > MAX_TITLE_CHARS {
        return Err(format!(
            "Ensure this value has at most {} characters (it has {}).",
            MAX_TITLE_CHARS, len
        ));
    }
    if let Some(ch) = title.chars().find(|c| c.is_control()) {
        return Err(format!("Title contains a control character ({:?}).", ch));
    }
    Ok(title.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub q: String,
}

impl Form for SearchForm {
    fn validate(data: &FormData) -> Result<Self, FormErrors> {
        match data.get("q") {
            Some(q) => Ok(SearchForm { q: q.to_string() }),
            None => Err(FormErrors::from(vec![FieldError::new(
                "q",
                "This field is required.",
            )])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_form_valid() {
        let data = FormData::new()
            .with("title", "  Python ")
            .with("content", "line one\r\nline two");
        let form = EntryForm::validate(&data).unwrap();
        assert_eq!(form.title, "Python");
        assert_eq!(form.content, "line one\nline two");
    }

    #[test]
    fn test_entry_form_empty_content_is_valid() {
        let data = FormData::new().with("title", "Stub").with("content", "");
        let form = EntryForm::validate(&data).unwrap();
        assert_eq!(form.content, "");
    }

    #[test]
    fn test_entry_form_missing_fields_reports_each() {
        let errors = EntryForm::validate(&FormData::new()).unwrap_err();
        assert_eq!(errors.errors().len(), 2);
        assert!(errors.for_field("title").is_some());
        assert!(errors.for_field("content").is_some());
    }

    #[test]
    fn test_entry_form_blank_title() {
        let data = FormData::new().with("title", "   ").with("content", "x");
        let errors = EntryForm::validate(&data).unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(
            errors.for_field("title").unwrap().message,
            "This field is required."
        );
    }

    #[test]
    fn test_title_too_long() {
        let long = "a".repeat(MAX_TITLE_CHARS + 1);
        assert!(validate_title(&long).is_err());
        assert!(validate_title(&"a".repeat(MAX_TITLE_CHARS)).is_ok());
    }

    #[test]
    fn test_title_control_character() {
        assert!(validate_title("Bad\ttitle").is_err());
        assert!(validate_title("Two\nlines").is_err());
    }

    #[test]
    fn test_title_allows_unicode_and_punctuation() {
        assert_eq!(validate_title("C++ / Ünïcode?").unwrap(), "C++ / Ünïcode?");
    }

    #[test]
    fn test_search_form() {
        let form = SearchForm::validate(&FormData::new().with("q", "py")).unwrap();
        assert_eq!(form.q, "py");

        let empty = SearchForm::validate(&FormData::new().with("q", "")).unwrap();
        assert_eq!(empty.q, "");

        let errors = SearchForm::validate(&FormData::new()).unwrap_err();
        assert!(errors.for_field("q").is_some());
    }

    #[test]
    fn test_form_data_from_iter() {
        let data: FormData = vec![("title", "Git"), ("content", "vcs")].into_iter().collect();
        assert_eq!(data.get("title"), Some("Git"));
        assert_eq!(data.get("missing"), None);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_form_errors_display() {
        let errors = FormErrors::from(vec![
            FieldError::new("title", "required"),
            FieldError::new("content", "required"),
        ]);
        assert_eq!(errors.to_string(), "title: required; content: required");
    }
}
