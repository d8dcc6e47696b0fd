//! Command-line argument parsing for seatbook.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally with a custom data file
    RunTui { data_file: Option<PathBuf> },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use seatbook::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["seatbook".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut data_file = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--data" => match args.next() {
                Some(path) if !path.is_empty() => data_file = Some(PathBuf::from(path)),
                _ => return CliCommand::Invalid("--data requires a path".to_string()),
            },
            other => {
                if let Some(path) = other.strip_prefix("--data=") {
                    if path.is_empty() {
                        return CliCommand::Invalid("--data requires a path".to_string());
                    }
                    data_file = Some(PathBuf::from(path));
                }
            }
        }
    }
    CliCommand::RunTui { data_file }
}

/// Usage text for `--help`.
pub fn usage() -> &'static str {
    "seatbook - cinema seat booking board\n\
     \n\
     USAGE:\n    seatbook [--data <PATH>]\n\
     \n\
     OPTIONS:\n    \
     --data <PATH>    Seat file to load and save (env: SEATBOOK_DATA_FILE)\n    \
     -V, --version    Print version\n    \
     -h, --help       Print this help\n\
     \n\
     CONTROLS:\n    \
     click            Toggle a seat\n    \
     r                Reset all seats\n    \
     q / Esc          Save and quit"
}
