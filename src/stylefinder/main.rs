//! # StyleFinder CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring, logging setup and per-command handlers
//! - `cli/session.rs`: the line-oriented interactive session
//! - `cli/render.rs`: terminal formatting of `CmdResult` values

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
