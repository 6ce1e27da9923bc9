//! # Configuration
//!
//! Wiki configuration lives in `config.json` inside the data directory. A
//! missing file means defaults; unknown or missing keys fall back per field.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `file_ext` | `.md` | Extension for entry content files |
//! | `edit_title_change` | `fork` | What an edit that changes the title does |
//! | `render_everywhere` | `false` | Render markup on random and search hits too |
//!
//! ### `edit_title_change`
//!
//! - `fork`: save under the submitted title and leave the old entry alone.
//!   Changing the title this way copies the entry.
//! - `rename`: save under the submitted title, then delete the old entry when
//!   the two titles name different entries.
//! - `ignore`: always save under the title in the path.
//!
//! ### `render_everywhere`
//!
//! Viewing an entry always renders its markup. Random and exact-match search
//! show the raw text unless this is turned on.

use crate::error::{Result, WikiError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".md";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTitlePolicy {
    #[default]
    Fork,
    Rename,
    Ignore,
}

impl fmt::Display for EditTitlePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditTitlePolicy::Fork => "fork",
            EditTitlePolicy::Rename => "rename",
            EditTitlePolicy::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

impl FromStr for EditTitlePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fork" => Ok(EditTitlePolicy::Fork),
            "rename" => Ok(EditTitlePolicy::Rename),
            "ignore" => Ok(EditTitlePolicy::Ignore),
            other => Err(format!(
                "Unknown edit policy '{}' (expected fork, rename or ignore)",
                other
            )),
        }
    }
}

/// Configuration for the wiki, stored in `<data>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiConfig {
    /// Extension for entry content files (e.g., ".md", ".txt")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    #[serde(default)]
    pub edit_title_change: EditTitlePolicy,

    #[serde(default)]
    pub render_everywhere: bool,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            file_ext: default_file_ext(),
            edit_title_change: EditTitlePolicy::default(),
            render_everywhere: false,
        }
    }
}

impl WikiConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WikiError::Io)?;
        let config: WikiConfig =
            serde_json::from_str(&content).map_err(WikiError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WikiError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WikiError::Serialization)?;
        fs::write(config_path, content).map_err(WikiError::Io)?;
        Ok(())
    }

    /// Get the file extension, normalized to start with a dot.
    pub fn file_ext(&self) -> String {
        if self.file_ext.starts_with('.') {
            self.file_ext.clone()
        } else {
            format!(".{}", self.file_ext)
        }
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    /// Keys accepted by [`WikiConfig::get`] and [`WikiConfig::set`].
    pub const KEYS: [&'static str; 3] = ["file-ext", "edit-title-change", "render-everywhere"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file-ext" => Some(self.file_ext()),
            "edit-title-change" => Some(self.edit_title_change.to_string()),
            "render-everywhere" => Some(self.render_everywhere.to_string()),
            _ => None,
        }
    }

    /// Set a value by its CLI key. Returns a description of the problem on bad input.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "file-ext" => {
                if value.trim_start_matches('.').is_empty() {
                    return Err("file-ext cannot be empty".to_string());
                }
                self.set_file_ext(value);
            }
            "edit-title-change" => self.edit_title_change = value.parse()?,
            "render-everywhere" => {
                self.render_everywhere = value
                    .parse()
                    .map_err(|_| format!("Expected true or false, got '{}'", value))?;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
