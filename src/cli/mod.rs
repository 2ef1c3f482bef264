//! CLI module for folio.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Usage display
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command, USAGE};
//!
//! let command = match parse_args(std::env::args()) {
//!     Ok(command) => command,
//!     Err(message) => {
//!         eprintln!("{message}\n\n{USAGE}");
//!         std::process::exit(2);
//!     }
//! };
//! let options = run_cli_command(command);
//! // Continue to the TUI with `options`
//! ```

pub mod args;
pub mod help;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use help::{handle_help_command, USAGE};
pub use version::{handle_version_command, VERSION};

/// Resolve a parsed command into TUI run options.
///
/// `Version` and `Help` print to stdout and exit the process; only
/// `RunTui` returns.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(options) => options,
    }
}
