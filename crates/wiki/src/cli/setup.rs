use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wiki", bin_name = "wiki", version)]
#[command(about = "A personal encyclopedia of Markdown entries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $WIKI_DATA_DIR, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all entries
    #[command(alias = "ls", display_order = 1)]
    Index,

    /// Show an entry with its markup rendered
    #[command(alias = "v", display_order = 2)]
    View {
        /// Entry title (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Create a new entry (prints the form when no fields are given)
    #[command(alias = "n", display_order = 3)]
    Create {
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        content: ContentArgs,
    },

    /// Edit an entry (prints its current text when no fields are given)
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Title of the entry to edit
        #[arg(required = true, num_args = 1..)]
        path_title: Vec<String>,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        content: ContentArgs,
    },

    /// Show a random entry
    #[command(display_order = 5)]
    Random,

    /// Search entry titles
    #[command(alias = "s", display_order = 6)]
    Search {
        /// Query words (joined with spaces; empty lists everything)
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Import `Title.md` files as entries
    #[command(display_order = 20)]
    Import {
        /// Files or directories to import
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Export all entries to a tar.gz archive
    #[command(display_order = 21)]
    Export {
        #[arg(short, long, default_value = "wiki-export.tar.gz")]
        output: PathBuf,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., edit-title-change)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ContentArgs {
    /// Entry content
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read content from a file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<PathBuf>,
}

impl ContentArgs {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.content_file.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["wiki"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_ls_alias_and_globals() {
        let cli = Cli::try_parse_from(["wiki", "ls", "--json", "--data", "/tmp/w"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Index)));
        assert!(cli.json);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/w")));
    }

    #[test]
    fn test_view_joins_title_words() {
        let cli = Cli::try_parse_from(["wiki", "view", "Git", "(software)"]).unwrap();
        match cli.command {
            Some(Commands::View { title }) => assert_eq!(title.join(" "), "Git (software)"),
            other => panic!("Expected view, got {:?}", other),
        }
    }

    #[test]
    fn test_create_content_sources_conflict() {
        let res = Cli::try_parse_from([
            "wiki",
            "create",
            "--title",
            "A",
            "--content",
            "x",
            "--content-file",
            "-",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_search_allows_empty_query() {
        let cli = Cli::try_parse_from(["wiki", "search"]).unwrap();
        match cli.command {
            Some(Commands::Search { query }) => assert!(query.is_empty()),
            other => panic!("Expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_args() {
        let cli =
            Cli::try_parse_from(["wiki", "edit", "Git", "--title", "Git SCM", "--content", "x"])
                .unwrap();
        match cli.command {
            Some(Commands::Edit {
                path_title,
                title,
                content,
            }) => {
                assert_eq!(path_title, vec!["Git"]);
                assert_eq!(title.as_deref(), Some("Git SCM"));
                assert_eq!(content.content.as_deref(), Some("x"));
                assert!(!content.is_empty());
            }
            other => panic!("Expected edit, got {:?}", other),
        }
    }
}
