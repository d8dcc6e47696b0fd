//! CLI module for seatbook.
//!
//! The CLI dispatcher is called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use seatbook::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand};
pub use version::{handle_version_command, version_string, VERSION};

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(code)` - Exit code after a CLI-only command ran
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(0)
        }
        CliCommand::Help => {
            println!("{}", usage());
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("Error: {}\n\n{}", message, usage());
            Some(2)
        }
        CliCommand::RunTui { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui { data_file: None });
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_exits_with_usage_error() {
        let result = run_cli_command(&CliCommand::Invalid("bad".to_string()));
        assert_eq!(result, Some(2));
    }
}
