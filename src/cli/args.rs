//! Command-line argument parsing for devdash.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use thiserror::Error;

pub const USAGE: &str = "\
Usage: devdash [OPTIONS]

Options:
  --api-url <URL>  Backend base URL (env: DEVDASH_API_URL, default: http://localhost:3000)
  --check          Probe the API once, print a summary and exit
  -V, --version    Print version and exit
  -h, --help       Print this help and exit";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Headless one-shot API probe
    Check { api_url: Option<String> },
    /// Run the TUI application (default)
    RunTui { api_url: Option<String> },
}

impl CliCommand {
    /// The `--api-url` override, if one was given
    pub fn api_url(&self) -> Option<&str> {
        match self {
            CliCommand::Check { api_url } | CliCommand::RunTui { api_url } => api_url.as_deref(),
            CliCommand::Version | CliCommand::Help => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("unrecognized argument '{0}'")]
    Unknown(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win as soon as they are seen.
///
/// # Examples
///
/// ```
/// use devdash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["devdash".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut check = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--check" => check = true,
            "--api-url" => match args.next() {
                Some(value) if !value.starts_with("--") => api_url = Some(value),
                _ => return Err(ArgsError::MissingValue("--api-url".to_string())),
            },
            other => match other.strip_prefix("--api-url=") {
                Some("") => return Err(ArgsError::MissingValue("--api-url".to_string())),
                Some(value) => api_url = Some(value.to_string()),
                None => return Err(ArgsError::Unknown(other.to_string())),
            },
        }
    }

    Ok(if check {
        CliCommand::Check { api_url }
    } else {
        CliCommand::RunTui { api_url }
    })
}
