//! Editing an entry.
//!
//! GET returns the form pre-filled from the entry named in the path. POST
//! saves unconditionally; it never refuses on an existing title. What happens
//! when the submitted title differs from the path title is decided by
//! [`EditTitlePolicy`]:
//!
//! | policy   | saved under      | old entry                     |
//! |----------|------------------|-------------------------------|
//! | `Fork`   | submitted title  | left in place                 |
//! | `Rename` | submitted title  | deleted if it is another entry |
//! | `Ignore` | path title       | overwritten                   |
//!
//! A case-only change (`git` → `Git`) names the same entry under every policy
//! except `Ignore`, and just updates the stored casing.

use crate::commands::{ContentMode, Method, View};
use crate::config::EditTitlePolicy;
use crate::error::{Result, WikiError};
use crate::forms::{validate_title, EntryForm, FieldError, Form, FormData, FormErrors};
use crate::markup::Renderer;
use crate::model::{title_key, Entry};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    renderer: &dyn Renderer,
    policy: EditTitlePolicy,
    path_title: &str,
    method: &Method,
    data: &FormData,
) -> Result<View> {
    if !method.is_post() {
        let entry = store.get_entry(path_title)?;
        return Ok(View::EditForm {
            title: entry.title,
            content: entry.content,
        });
    }

    let form = EntryForm::validate(data).map_err(WikiError::InvalidForm)?;

    let target = match policy {
        EditTitlePolicy::Ignore => existing_title(store, path_title)?,
        EditTitlePolicy::Fork | EditTitlePolicy::Rename => form.title.clone(),
    };

    store.save_entry(&target, &form.content)?;
    tracing::info!(path_title, title = %target, %policy, "saved edit");

    if policy == EditTitlePolicy::Rename && title_key(&target) != title_key(path_title) {
        match store.delete_entry(path_title) {
            Ok(()) => tracing::info!(from = path_title, to = %target, "renamed entry"),
            Err(WikiError::EntryNotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(View::entry(
        Entry::new(target, form.content),
        ContentMode::Rendered,
        renderer,
    ))
}

/// Stored casing of `title`, or `title` itself when no entry has it yet. A
/// new title must pass the same rules as a submitted one.
fn existing_title<S: DataStore>(store: &S, title: &str) -> Result<String> {
    match store.get_entry(title) {
        Ok(entry) => Ok(entry.title),
        Err(WikiError::EntryNotFound(_)) => validate_title(title).map_err(|message| {
            WikiError::InvalidForm(FormErrors::from(vec![FieldError::new("title", message)]))
        }),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkdownRenderer;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn post(title: &str, content: &str) -> FormData {
        FormData::new()
            .with("title", title)
            .with("content", content)
    }

    fn edit(
        store: &mut InMemoryStore,
        policy: EditTitlePolicy,
        path_title: &str,
        data: &FormData,
    ) -> Result<View> {
        run(
            store,
            &MarkdownRenderer,
            policy,
            path_title,
            &Method::Post,
            data,
        )
    }

    #[test]
    fn get_prefills_form() {
        let mut fixture = StoreFixture::new().with_entry("Git", "# Git");
        let view = run(
            &mut fixture.store,
            &MarkdownRenderer,
            EditTitlePolicy::Fork,
            "git",
            &Method::Get,
            &FormData::new(),
        )
        .unwrap();
        assert_eq!(
            view,
            View::EditForm {
                title: "Git".into(),
                content: "# Git".into()
            }
        );
    }

    #[test]
    fn get_unknown_entry_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            &MarkdownRenderer,
            EditTitlePolicy::Fork,
            "Nope",
            &Method::Get,
            &FormData::new(),
        )
        .unwrap_err();
        assert!(matches!(err, WikiError::EntryNotFound(_)));
    }

    #[test]
    fn successive_edits_overwrite() {
        let mut fixture = StoreFixture::new().with_entry("Git", "C0");
        edit(&mut fixture.store, EditTitlePolicy::Fork, "Git", &post("Git", "C1")).unwrap();
        edit(&mut fixture.store, EditTitlePolicy::Fork, "Git", &post("Git", "C2")).unwrap();

        assert_eq!(fixture.store.get_entry("Git").unwrap().content, "C2");
        assert_eq!(fixture.store.list_entries().unwrap(), vec!["Git"]);
    }

    #[test]
    fn post_shows_rendered_result() {
        let mut fixture = StoreFixture::new().with_entry("Git", "old");
        let view = edit(
            &mut fixture.store,
            EditTitlePolicy::Fork,
            "Git",
            &post("Git", "**new**"),
        )
        .unwrap();
        assert_eq!(
            view,
            View::Entry {
                title: "Git".into(),
                content: "<p><strong>new</strong></p>\n".into(),
                rendered: true
            }
        );
    }

    #[test]
    fn post_to_unknown_title_creates_it() {
        let mut store = InMemoryStore::new();
        edit(&mut store, EditTitlePolicy::Fork, "Fresh", &post("Fresh", "body")).unwrap();
        assert_eq!(store.get_entry("fresh").unwrap().content, "body");
    }

    #[test]
    fn fork_policy_leaves_old_entry() {
        let mut fixture = StoreFixture::new().with_entry("Git", "vcs");
        edit(
            &mut fixture.store,
            EditTitlePolicy::Fork,
            "Git",
            &post("Mercurial", "other vcs"),
        )
        .unwrap();

        assert_eq!(
            fixture.store.list_entries().unwrap(),
            vec!["Git", "Mercurial"]
        );
        assert_eq!(fixture.store.get_entry("Git").unwrap().content, "vcs");
    }

    #[test]
    fn rename_policy_removes_old_entry() {
        let mut fixture = StoreFixture::new().with_entry("Git", "vcs");
        edit(
            &mut fixture.store,
            EditTitlePolicy::Rename,
            "Git",
            &post("Git (software)", "vcs"),
        )
        .unwrap();

        assert_eq!(fixture.store.list_entries().unwrap(), vec!["Git (software)"]);
    }

    #[test]
    fn rename_policy_case_only_change_keeps_entry() {
        let mut fixture = StoreFixture::new().with_entry("git", "vcs");
        edit(&mut fixture.store, EditTitlePolicy::Rename, "git", &post("Git", "vcs")).unwrap();

        assert_eq!(fixture.store.list_entries().unwrap(), vec!["Git"]);
        assert_eq!(fixture.store.get_entry("GIT").unwrap().content, "vcs");
    }

    #[test]
    fn ignore_policy_saves_under_path_title() {
        let mut fixture = StoreFixture::new().with_entry("Git", "vcs");
        let view = edit(
            &mut fixture.store,
            EditTitlePolicy::Ignore,
            "git",
            &post("Something Else", "updated"),
        )
        .unwrap();

        assert_eq!(fixture.store.list_entries().unwrap(), vec!["Git"]);
        assert_eq!(fixture.store.get_entry("Git").unwrap().content, "updated");
        assert!(matches!(view, View::Entry { ref title, .. } if title == "Git"));
    }

    #[test]
    fn ignore_policy_rejects_blank_path_title() {
        let mut store = InMemoryStore::new();
        let err = edit(&mut store, EditTitlePolicy::Ignore, "   ", &post("Valid", "x")).unwrap_err();

        assert!(matches!(err, WikiError::InvalidForm(ref e) if e.for_field("title").is_some()));
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn ignore_policy_rejects_control_characters_in_path_title() {
        let mut store = InMemoryStore::new();
        let err = edit(
            &mut store,
            EditTitlePolicy::Ignore,
            "bad\ttitle",
            &post("Valid", "x"),
        )
        .unwrap_err();

        assert_eq!(err.user_message(), "Invalid form");
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn ignore_policy_creates_valid_unknown_path_title() {
        let mut store = InMemoryStore::new();
        edit(&mut store, EditTitlePolicy::Ignore, " Fresh ", &post("Other", "x")).unwrap();
        assert_eq!(store.list_entries().unwrap(), vec!["Fresh"]);
    }

    #[test]
    fn invalid_form_does_not_write() {
        let mut fixture = StoreFixture::new().with_entry("Git", "vcs");
        let err = edit(
            &mut fixture.store,
            EditTitlePolicy::Fork,
            "Git",
            &FormData::new().with("title", "Git"),
        )
        .unwrap_err();

        assert!(matches!(err, WikiError::InvalidForm(_)));
        assert_eq!(fixture.store.get_entry("Git").unwrap().content, "vcs");
    }
}
