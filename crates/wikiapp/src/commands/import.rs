use crate::commands::create::create_entry;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WikiError};
use crate::forms::validate_title;
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions picked up when importing a directory.
pub const IMPORT_EXTS: [&str; 3] = ["md", "markdown", "txt"];

/// Imports `Title.md` style files. Directories are scanned one level deep for
/// files with an [`IMPORT_EXTS`] extension; files named directly are taken
/// regardless of extension. Existing titles are skipped, never overwritten.
pub fn run<S: DataStore>(store: &mut S, paths: Vec<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        if path.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(&path)? {
                let sub_path = entry?.path();
                if sub_path.is_file() && has_import_ext(&sub_path) {
                    files.push(sub_path);
                }
            }
            files.sort();
            for file in files {
                import_file(store, &file, &mut result)?;
            }
        } else if path.is_file() {
            import_file(store, &path, &mut result)?;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        result.titles.len()
    )));
    Ok(result)
}

fn has_import_ext(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_ascii_lowercase();
            IMPORT_EXTS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn import_file<S: DataStore>(store: &mut S, path: &Path, result: &mut CmdResult) -> Result<()> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let title = match validate_title(&stem) {
        Ok(title) => title,
        Err(reason) => {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {}: {}",
                path.display(),
                reason
            )));
            return Ok(());
        }
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content.replace("\r\n", "\n"),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read import file");
            result.add_message(CmdMessage::warning(format!(
                "Failed to import: {}",
                path.display()
            )));
            return Ok(());
        }
    };

    match create_entry(store, &title, &content) {
        Ok(()) => {
            result.add_message(CmdMessage::info(format!("Imported: {}", title)));
            result.titles.push(title);
        }
        Err(WikiError::EntryAlreadyExists(existing)) => {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {}: entry already exists",
                existing
            )));
            result.skipped.push(title);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
