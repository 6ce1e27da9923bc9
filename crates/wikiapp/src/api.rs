//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every wiki action, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** each action to its `commands::*::run`
//! - **Applies configuration**: the edit title policy and whether random and
//!   search hits are rendered
//! - **Presents errors**: non-fatal failures (missing entry, duplicate title,
//!   bad form, wrong method, empty search, empty store) come back as
//!   `Ok(View::Error { message })` with the user-facing message. Store
//!   failures stay `Err` and abort the request.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Output**: no stdout, stderr, or formatting
//!
//! ## Generic Over DataStore
//!
//! `WikiApi<S: DataStore, R: Renderer>`:
//! - Production: `WikiApi<FileStore>`
//! - Testing: `WikiApi<InMemoryStore>`
//!
//! The renderer defaults to [`MarkdownRenderer`].

use crate::commands::{self, CmdResult, ContentMode, Method, View};
use crate::config::WikiConfig;
use crate::error::Result;
use crate::forms::FormData;
use crate::markup::{MarkdownRenderer, Renderer};
use crate::store::DataStore;
use rand::Rng;
use std::path::{Path, PathBuf};

pub struct WikiApi<S: DataStore, R: Renderer = MarkdownRenderer> {
    store: S,
    renderer: R,
    config: WikiConfig,
}

impl<S: DataStore> WikiApi<S, MarkdownRenderer> {
    pub fn new(store: S, config: WikiConfig) -> Self {
        Self::with_renderer(store, MarkdownRenderer, config)
    }
}

impl<S: DataStore, R: Renderer> WikiApi<S, R> {
    pub fn with_renderer(store: S, renderer: R, config: WikiConfig) -> Self {
        Self {
            store,
            renderer,
            config,
        }
    }

    pub fn index(&self) -> Result<View> {
        present(commands::index::run(&self.store))
    }

    pub fn view(&self, title: &str) -> Result<View> {
        present(commands::view::run(&self.store, &self.renderer, title))
    }

    pub fn create(&mut self, method: &Method, data: &FormData) -> Result<View> {
        present(commands::create::run(
            &mut self.store,
            &self.renderer,
            method,
            data,
        ))
    }

    pub fn edit(&mut self, title: &str, method: &Method, data: &FormData) -> Result<View> {
        present(commands::edit::run(
            &mut self.store,
            &self.renderer,
            self.config.edit_title_change,
            title,
            method,
            data,
        ))
    }

    pub fn random(&self) -> Result<View> {
        self.random_with(&mut rand::rng())
    }

    /// Random entry using the given generator, for reproducible picks.
    pub fn random_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<View> {
        present(commands::random::run(
            &self.store,
            &self.renderer,
            self.hit_mode(),
            rng,
        ))
    }

    pub fn search(&self, method: &Method, data: &FormData) -> Result<View> {
        present(commands::search::run(
            &self.store,
            &self.renderer,
            self.hit_mode(),
            method,
            data,
        ))
    }

    pub fn import_entries(&mut self, paths: Vec<PathBuf>) -> Result<CmdResult> {
        commands::import::run(&mut self.store, paths)
    }

    pub fn export_entries(&self, output: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, output)
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn hit_mode(&self) -> ContentMode {
        if self.config.render_everywhere {
            ContentMode::Rendered
        } else {
            ContentMode::Raw
        }
    }
}

fn present(result: Result<View>) -> Result<View> {
    match result {
        Ok(view) => Ok(view),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "request ended in error view");
            Ok(View::error(e.user_message()))
        }
    }
}
