use crate::commands::{ContentMode, Method, View};
use crate::error::{Result, WikiError};
use crate::forms::{EntryForm, Form, FormData};
use crate::markup::Renderer;
use crate::model::Entry;
use crate::store::DataStore;

/// GET (or any non-POST) shows the blank form; POST creates the entry.
pub fn run<S: DataStore>(
    store: &mut S,
    renderer: &dyn Renderer,
    method: &Method,
    data: &FormData,
) -> Result<View> {
    if !method.is_post() {
        return Ok(View::CreateForm);
    }

    let form = EntryForm::validate(data).map_err(WikiError::InvalidForm)?;
    create_entry(store, &form.title, &form.content)?;

    Ok(View::entry(
        Entry::new(form.title, form.content),
        ContentMode::Rendered,
        renderer,
    ))
}

/// Saves a new entry, refusing when any case variant of the title exists.
/// The store is not written to on refusal.
pub fn create_entry<S: DataStore>(store: &mut S, title: &str, content: &str) -> Result<()> {
    match store.get_entry(title) {
        Ok(existing) => return Err(WikiError::EntryAlreadyExists(existing.title)),
        Err(WikiError::EntryNotFound(_)) => {}
        Err(e) => return Err(e),
    }

    store.save_entry(title, content)?;
    tracing::info!(title, "created entry");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkdownRenderer;
    use crate::store::memory::InMemoryStore;

    fn post(title: &str, content: &str) -> FormData {
        FormData::new()
            .with("title", title)
            .with("content", content)
    }

    #[test]
    fn get_shows_blank_form() {
        let mut store = InMemoryStore::new();
        let view = run(&mut store, &MarkdownRenderer, &Method::Get, &FormData::new()).unwrap();
        assert_eq!(view, View::CreateForm);
    }

    #[test]
    fn other_methods_fall_back_to_form() {
        let mut store = InMemoryStore::new();
        let method = Method::Other("PUT".into());
        let view = run(&mut store, &MarkdownRenderer, &method, &post("A", "b")).unwrap();
        assert_eq!(view, View::CreateForm);
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn post_creates_and_shows_rendered_entry() {
        let mut store = InMemoryStore::new();
        let view = run(
            &mut store,
            &MarkdownRenderer,
            &Method::Post,
            &post("Rust", "# Rust"),
        )
        .unwrap();

        assert_eq!(
            view,
            View::Entry {
                title: "Rust".into(),
                content: "<h1>Rust</h1>\n".into(),
                rendered: true
            }
        );
        assert_eq!(store.get_entry("rust").unwrap().content, "# Rust");
    }

    #[test]
    fn duplicate_title_is_refused_and_content_kept() {
        let mut store = InMemoryStore::new();
        run(&mut store, &MarkdownRenderer, &Method::Post, &post("Python", "C1")).unwrap();

        let err = run(&mut store, &MarkdownRenderer, &Method::Post, &post("PYTHON", "C2"))
            .unwrap_err();

        assert!(matches!(err, WikiError::EntryAlreadyExists(ref t) if t == "Python"));
        assert_eq!(err.user_message(), "Entry already exists");
        let entry = store.get_entry("Python").unwrap();
        assert_eq!(entry.title, "Python");
        assert_eq!(entry.content, "C1");
    }

    #[test]
    fn invalid_form_is_rejected() {
        let mut store = InMemoryStore::new();
        let data = FormData::new().with("title", "  ");
        let err = run(&mut store, &MarkdownRenderer, &Method::Post, &data).unwrap_err();

        match err {
            WikiError::InvalidForm(errors) => {
                assert!(errors.for_field("title").is_some());
                assert!(errors.for_field("content").is_some());
            }
            other => panic!("Expected InvalidForm, got {:?}", other),
        }
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn store_failure_is_fatal() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let err = run(&mut store, &MarkdownRenderer, &Method::Post, &post("A", "b")).unwrap_err();
        assert!(err.is_fatal());
    }
}
