//! # Wiki Architecture
//!
//! A small personal encyclopedia: uniquely titled entries written in Markdown,
//! browsed through index, view, create, edit, random and search actions.
//! The crate is a UI-agnostic library; the `wiki` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `wiki` CLI, or any other UI)                   │
//! │  - Turns user input into a Method + FormData                │
//! │  - Draws the returned View                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Dispatches to handlers, applies configuration            │
//! │  - Turns non-fatal errors into error views                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per action, returns a View                   │
//! │  - Uses forms, resolver and markup                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, case-insensitive titles                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns plain types.
//! It never writes to stdout or stderr and never exits the process. The same
//! core could sit behind an HTTP server.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: most behavior is pinned down here, against `InMemoryStore`.
//! 2. **API**: dispatch, configuration and error presentation.
//! 3. **Store**: backend round trips and on-disk layout, with `tempfile`.
//! 4. **CLI**: end-to-end runs of the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One handler per action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Entry` and its index record
//! - [`forms`]: Form schemas and validation
//! - [`resolver`]: Search query classification
//! - [`markup`]: Markdown to HTML
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod forms;
pub mod init;
pub mod markup;
pub mod model;
pub mod resolver;
pub mod store;

pub use api::WikiApi;
pub use commands::{CmdResult, Method, View};
pub use error::{Result, WikiError};
pub use forms::FormData;
