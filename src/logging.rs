//! tracing-subscriber setup.
//!
//! The TUI owns stdout, so interactive runs log to a file. The headless
//! `--check` probe logs to stderr instead.

use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

use crate::config::DashboardConfig;

/// `<data-local-dir>/devdash/devdash.log`, or the temp dir when the platform
/// has no data directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("devdash")
        .join("devdash.log")
}

fn env_filter(config: &DashboardConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber appending to the configured log file.
/// Returns the path actually used. If a subscriber is already installed it
/// is kept and this still succeeds.
pub fn init_file_logging(config: &DashboardConfig) -> Result<PathBuf> {
    let path = config.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(env_filter(config))
        .try_init()
        .unwrap_or_else(already_installed);

    Ok(path)
}

/// Install a global subscriber writing to stderr. Like
/// [`init_file_logging`], an existing subscriber is left in place.
pub fn init_stderr_logging(config: &DashboardConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(config))
        .try_init()
        .unwrap_or_else(already_installed);
    Ok(())
}

fn already_installed(err: TryInitError) {
    tracing::debug!(error = %err, "global subscriber already set, keeping it");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        let path = default_log_path();
        assert!(path.ends_with("devdash/devdash.log"));
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let config = DashboardConfig::default().with_log_filter("[[not a filter");
        // Must not panic; falls back to "info".
        let _ = env_filter(&config);
    }

    #[test]
    fn test_file_logging_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dash.log");
        let config = DashboardConfig::default().with_log_file(&path);

        assert_eq!(init_file_logging(&config).unwrap(), path);
        assert!(path.exists());
    }

    #[test]
    fn test_second_init_is_ok() {
        let config = DashboardConfig::default();
        assert!(init_stderr_logging(&config).is_ok());
        assert!(init_stderr_logging(&config).is_ok());
    }
}
