//! CLI module for devdash.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and help display
//! - The headless `--check` probe
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use devdash::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     // CLI command was executed, exit with result
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//!     std::process::exit(0);
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod check;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};
pub use check::handle_check_command;
pub use version::{handle_help_command, handle_version_command, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            // This function never returns (calls exit)
            handle_version_command();
        }
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::Check { api_url } => Some(handle_check_command(api_url.as_deref())),
        CliCommand::RunTui { .. } => None,
    }
}
