use crate::forms::FormErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry already exists: {0}")]
    EntryAlreadyExists(String),

    #[error("Invalid form: {0}")]
    InvalidForm(FormErrors),

    #[error("Invalid request method: {0}")]
    InvalidRequest(String),

    #[error("No results found for query: {0:?}")]
    NoResults(String),

    #[error("No entries found")]
    EmptyStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl WikiError {
    /// Store failures abort the request; everything else becomes an error view.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WikiError::Io(_) | WikiError::Serialization(_) | WikiError::Store(_)
        )
    }

    /// The message shown to the user when the error is rendered as a view.
    pub fn user_message(&self) -> String {
        match self {
            WikiError::EntryNotFound(_) => "Entry not found".to_string(),
            WikiError::EntryAlreadyExists(_) => "Entry already exists".to_string(),
            WikiError::InvalidForm(_) => "Invalid form".to_string(),
            WikiError::InvalidRequest(_) => "Invalid request".to_string(),
            WikiError::NoResults(_) => "No results found".to_string(),
            WikiError::EmptyStore => "No entries found".to_string(),
            fatal => fatal.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WikiError>;
