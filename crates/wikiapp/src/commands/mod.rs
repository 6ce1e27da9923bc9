//! # Command Layer
//!
//! One module per user action, each exposing a `run` function. This is where
//! the request handling logic lives; the API facade only dispatches and
//! converts errors.
//!
//! ## Role and Responsibilities
//!
//! A handler maps (method, submitted form or path title, store state) to a
//! [`View`]: the instruction telling the rendering layer what to draw. Handlers:
//! - Validate forms through [`crate::forms`]
//! - Read and write through [`crate::store::DataStore`]
//! - Return user-facing failures as `Err(WikiError::…)` and let the facade
//!   turn them into [`View::Error`]
//!
//! ## What Handlers Do NOT Do
//!
//! - **Any I/O** beyond the store (import/export excepted, they are file tools)
//! - **Templating**: a `View` is data, the UI decides how it looks
//! - **Routing**: callers pick the handler
//!
//! ## Testing Strategy
//!
//! Handler tests use `InMemoryStore` and assert on the returned `View` or
//! error variant. This is where most of the behavior is pinned down.
//!
//! ## Command Modules
//!
//! - [`index`]: List all entries
//! - [`view`]: Show one entry, rendered
//! - [`create`]: Create form and create-only save
//! - [`edit`]: Edit form and overwrite
//! - [`random`]: Show a random entry
//! - [`search`]: Resolve a title search
//! - [`import`]: Load entries from `Title.md` files
//! - [`export`]: Archive entries as `Title.md` files

use crate::markup::Renderer;
use crate::model::Entry;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub mod create;
pub mod edit;
pub mod export;
pub mod import;
pub mod index;
pub mod random;
pub mod search;
pub mod view;

/// Request method as seen by the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

impl Method {
    pub fn is_post(&self) -> bool {
        matches!(self, Method::Post)
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Other(m) => f.write_str(m),
        }
    }
}

/// Whether an entry is shown with its markup rendered or as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    Rendered,
    Raw,
}

/// Render instruction returned by every handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Index {
        entries: Vec<String>,
    },
    Entry {
        title: String,
        content: String,
        /// `content` is display markup rather than the stored text
        rendered: bool,
    },
    CreateForm,
    EditForm {
        title: String,
        content: String,
    },
    SearchResults {
        query: String,
        results: Vec<String>,
    },
    Error {
        message: String,
    },
}

impl View {
    pub fn entry(entry: Entry, mode: ContentMode, renderer: &dyn Renderer) -> Self {
        match mode {
            ContentMode::Rendered => View::Entry {
                content: renderer.render(&entry.content),
                title: entry.title,
                rendered: true,
            },
            ContentMode::Raw => View::Entry {
                title: entry.title,
                content: entry.content,
                rendered: false,
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        View::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, View::Error { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of the file tools (import, export).
#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Titles written or archived
    pub titles: Vec<String>,
    /// Titles passed over, with the reason in `messages`
    pub skipped: Vec<String>,
    pub path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}
