//! # CLI Behavior
//!
//! One possible client of the wiki, not the wiki itself. Each subcommand maps
//! to a request on [`wikiapp::WikiApi`]:
//!
//! | command                       | request                          |
//! |-------------------------------|----------------------------------|
//! | `wiki`, `wiki index`, `ls`    | index                            |
//! | `wiki view <title>`           | view                             |
//! | `wiki create`                 | GET create (prints the form)     |
//! | `wiki create --title T ...`   | POST create                      |
//! | `wiki edit <title>`           | GET edit (prints current text)   |
//! | `wiki edit <title> --content` | POST edit                        |
//! | `wiki random`                 | random                           |
//! | `wiki search <q>`             | POST search                      |
//!
//! `import`, `export` and `config` are file tools with no request behind them.
//!
//! ## Content Sources
//!
//! Create and edit take content from `--content`, or from `--content-file`,
//! where `-` means stdin. Edit keeps whatever field is not given.
//!
//! ## Output
//!
//! Views print as text, or as JSON with `--json`. Logging goes to stderr and
//! is off below `warn` unless `-v` or `RUST_LOG` says otherwise.

mod commands;
mod render;
mod setup;

pub use commands::run;
