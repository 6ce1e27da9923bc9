//! # Wiki CLI
//!
//! The binary is thin: everything lives in `src/cli/`, and this file only calls
//! `cli::run()` and turns the outcome into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/wiki/src/cli/)                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Method + form building and dispatch (commands.rs)        │
//! │  - Terminal and JSON output (render.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  wikiapp (crates/wikiapp/)                                  │
//! │  - WikiApi facade, handlers, store                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fatal errors print `Error: ...` and exit 1. A request that ends in an error
//! view (missing entry, duplicate title, ...) is printed and also exits 1.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
