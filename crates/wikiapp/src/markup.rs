//! Markup rendering.
//!
//! Entries are authored in Markdown and displayed as HTML. Rendering is a pure
//! function that never fails: malformed input degrades to whatever the parser
//! makes of it.

use pulldown_cmark::{html, Options, Parser};

/// Converts stored markup into display markup.
pub trait Renderer {
    fn render(&self, markup: &str) -> String;
}

/// CommonMark renderer with the usual GitHub-flavored extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, markup: &str) -> String {
        render_markdown(markup)
    }
}

/// Render a raw Markdown string to HTML.
pub fn render_markdown(raw: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(raw, options);
    let mut html_output = String::with_capacity(raw.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}
