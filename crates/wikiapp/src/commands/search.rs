use crate::commands::{ContentMode, Method, View};
use crate::error::{Result, WikiError};
use crate::forms::{Form, FormData, SearchForm};
use crate::markup::Renderer;
use crate::resolver::{resolve, SearchResult};
use crate::store::DataStore;

/// Search only answers POST. An exact title hit shows the entry in `mode`,
/// partial hits give a results listing.
pub fn run<S: DataStore>(
    store: &S,
    renderer: &dyn Renderer,
    mode: ContentMode,
    method: &Method,
    data: &FormData,
) -> Result<View> {
    if !method.is_post() {
        return Err(WikiError::InvalidRequest(method.to_string()));
    }

    let form = SearchForm::validate(data).map_err(WikiError::InvalidForm)?;
    let titles = store.list_entries()?;

    match resolve(&form.q, &titles) {
        SearchResult::ExactMatch(title) => {
            let entry = store.get_entry(&title)?;
            Ok(View::entry(entry, mode, renderer))
        }
        SearchResult::NoMatch => Err(WikiError::NoResults(form.q)),
        SearchResult::MultipleMatches(results) => {
            tracing::debug!(query = %form.q, hits = results.len(), "search matched");
            Ok(View::SearchResults {
                query: form.q,
                results,
            })
        }
    }
}
