use crate::commands::{ContentMode, View};
use crate::error::{Result, WikiError};
use crate::markup::Renderer;
use crate::store::DataStore;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Picks one title uniformly from the index and shows that entry.
pub fn run<S: DataStore, R: Rng + ?Sized>(
    store: &S,
    renderer: &dyn Renderer,
    mode: ContentMode,
    rng: &mut R,
) -> Result<View> {
    let titles = store.list_entries()?;
    let title = titles.choose(rng).ok_or(WikiError::EmptyStore)?;
    tracing::debug!(title = %title, total = titles.len(), "picked random entry");

    let entry = store.get_entry(title)?;
    Ok(View::entry(entry, mode, renderer))
}
