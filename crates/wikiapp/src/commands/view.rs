use crate::commands::{ContentMode, View};
use crate::error::Result;
use crate::markup::Renderer;
use crate::store::DataStore;

/// Shows an entry with its markup rendered. Unknown titles are `EntryNotFound`.
pub fn run<S: DataStore>(store: &S, renderer: &dyn Renderer, title: &str) -> Result<View> {
    let entry = store.get_entry(title)?;
    Ok(View::entry(entry, ContentMode::Rendered, renderer))
}
