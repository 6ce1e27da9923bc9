//! # Data Directory Resolution
//!
//! Everything a wiki owns lives in one directory: the index, one content file
//! per entry, and `config.json`. [`initialize`] picks that directory as:
//!
//! 1. The explicit override (`wiki --data <dir>`)
//! 2. The `WIKI_DATA_DIR` environment variable
//! 3. The OS data directory from `directories` (e.g. `~/.local/share/wiki`)
//!
//! The directory does not need to exist yet. It is created by the first write.

use crate::api::WikiApi;
use crate::config::WikiConfig;
use crate::error::{Result, WikiError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "WIKI_DATA_DIR";

pub struct WikiContext {
    pub api: WikiApi<FileStore>,
    pub data_dir: PathBuf,
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<WikiContext> {
    let data_dir = resolve_data_dir(data_override)?;

    let config = match WikiConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, dir = %data_dir.display(), "unreadable config, using defaults");
            WikiConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone()).with_file_ext(&config.file_ext());
    let api = WikiApi::new(store, config);
    tracing::debug!(dir = %data_dir.display(), "wiki initialized");

    Ok(WikiContext { api, data_dir })
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "wiki")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WikiError::Store("Could not determine a data directory".to_string()))
}
