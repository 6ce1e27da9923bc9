use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use wikiapp::commands::{CmdMessage, MessageLevel};
use wikiapp::View;

/// Text for a view. Error views are rendered here too; the caller decides the stream.
pub(super) fn render_view(view: &View) -> String {
    match view {
        View::Index { entries } => {
            if entries.is_empty() {
                return "No entries yet.".dimmed().to_string();
            }
            let mut out = String::new();
            for title in entries {
                out.push_str(&format!("  {}\n", title));
            }
            out.push_str(&format!("\n{} entries", entries.len()).dimmed().to_string());
            out
        }
        View::Entry { title, content, .. } => {
            format!("{}\n{}\n\n{}", title.bold(), underline(title), content.trim_end())
        }
        View::CreateForm => [
            "New entry".bold().to_string(),
            "  wiki create --title <TITLE> --content <TEXT>".to_string(),
            "  wiki create --title <TITLE> --content-file <FILE|->".to_string(),
        ]
        .join("\n"),
        View::EditForm { title, content } => format!(
            "{} {}\n{}\n\n{}",
            "Editing".dimmed(),
            title.bold(),
            underline(&format!("Editing {}", title)),
            content.trim_end()
        ),
        View::SearchResults { query, results } => {
            let mut out = format!("Results for {:?}:\n", query).bold().to_string();
            for title in results {
                out.push_str(&format!("\n  {}", title));
            }
            out
        }
        View::Error { message } => message.red().to_string(),
    }
}

fn underline(title: &str) -> String {
    "=".repeat(title.width().max(1))
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
