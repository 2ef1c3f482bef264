//! Help command for the folio CLI.

use super::version::VERSION;

/// Usage text printed for `--help` and after argument errors.
pub const USAGE: &str = "\
folio - a personal profile page for the terminal

Usage: folio [OPTIONS]

Options:
      --profile <PATH>   Load profile content from a JSON file
      --log-file <PATH>  Write logs to PATH instead of the default location
  -V, --version          Print version
  -h, --help             Print this help

Environment:
  FOLIO_PROFILE          Profile file used when --profile is not given
  FOLIO_LOG              Log filter directives (tracing-subscriber syntax)";

/// Handle the --help command.
///
/// Prints usage and exits successfully.
pub fn handle_help_command() -> ! {
    println!("folio {}\n\n{}", VERSION, USAGE);
    std::process::exit(0)
}
