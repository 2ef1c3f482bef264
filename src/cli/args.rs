//! Command-line argument parsing for folio.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage information
    Help,
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

/// Options that shape a TUI run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    /// Profile JSON to show instead of the built-in content.
    pub profile: Option<PathBuf>,
    /// Log file to write instead of the default location.
    pub log_file: Option<PathBuf>,
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Errors
///
/// Returns a message for unknown flags and for value flags missing their
/// value.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    args.next();

    let mut options = RunOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--profile" => match args.next() {
                Some(path) => options.profile = Some(PathBuf::from(path)),
                None => return Err("--profile requires a file path".to_string()),
            },
            "--log-file" => match args.next() {
                Some(path) => options.log_file = Some(PathBuf::from(path)),
                None => return Err("--log-file requires a file path".to_string()),
            },
            other if other.starts_with('-') => {
                return Err(format!("unknown flag: {other}"));
            }
            _ => {}
        }
    }
    Ok(CliCommand::RunTui(options))
}
