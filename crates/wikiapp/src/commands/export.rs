use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes every entry into a gzip tarball at `output`, one
/// `entries/{Title}.md` file per entry.
pub fn run<S: DataStore>(store: &S, output: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let titles = store.list_entries()?;

    if titles.is_empty() {
        result.add_message(CmdMessage::info("No entries to export."));
        return Ok(result);
    }

    let entries = titles
        .iter()
        .map(|title| store.get_entry(title))
        .collect::<Result<Vec<_>>>()?;

    let file = File::create(output)?;
    write_archive(file, &entries)?;
    tracing::info!(path = %output.display(), count = entries.len(), "exported entries");

    result.titles = titles;
    result.add_message(CmdMessage::success(format!(
        "Exported {} entries to {}",
        entries.len(),
        output.display()
    )));
    Ok(result.with_path(output.to_path_buf()))
}

pub fn write_archive<W: Write>(writer: W, entries: &[Entry]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);
    let mut used = HashSet::new();

    for entry in entries {
        let name = unique_name(&sanitize_filename(&entry.title), &mut used);
        let path = format!("entries/{}.md", name);

        let mut header = tar::Header::new_gnu();
        header.set_size(entry.content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, path, entry.content.as_bytes())?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

/// Replaces characters that are unsafe in file names with `_`.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '(' | ')') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}

// Titles differing only in unsafe characters would collide after sanitizing.
fn unique_name(base: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut n = 2;
    while !used.insert(candidate.to_lowercase()) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    candidate
}
