//! Search resolution.
//!
//! A query is matched against titles only, as a case-insensitive substring.
//! The outcome decides what the search page shows:
//!
//! - [`SearchResult::ExactMatch`]: the raw query is, byte for byte, one of the
//!   matching titles. The entry is shown directly.
//! - [`SearchResult::NoMatch`]: nothing matched.
//! - [`SearchResult::MultipleMatches`]: everything else, in title-list order.
//!
//! The exact-match check is case-sensitive and only considers titles that
//! already matched. `"python"` against `["Python"]` is therefore a listing of
//! one, not a jump to the entry.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    ExactMatch(String),
    NoMatch,
    MultipleMatches(Vec<String>),
}

pub fn resolve<T: AsRef<str>>(query: &str, titles: &[T]) -> SearchResult {
    let query_lower = query.to_lowercase();

    let matches: Vec<&str> = titles
        .iter()
        .map(|title| title.as_ref())
        .filter(|title| title.to_lowercase().contains(&query_lower))
        .collect();

    if matches.iter().any(|title| *title == query) {
        SearchResult::ExactMatch(query.to_string())
    } else if matches.is_empty() {
        SearchResult::NoMatch
    } else {
        SearchResult::MultipleMatches(matches.into_iter().map(str::to_string).collect())
    }
}
