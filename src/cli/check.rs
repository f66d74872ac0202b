//! `--check`: probe the API without starting the TUI.

use color_eyre::{eyre::eyre, Result};

use crate::api::DashboardApi;
use crate::config::DashboardConfig;
use crate::health_check::{display_probe_report, run_probe};
use crate::logging::init_stderr_logging;

/// Resolve config, probe once, print the report.
///
/// Returns an error when the API is unreachable so the process exits 1.
pub fn handle_check_command(api_url: Option<&str>) -> Result<()> {
    let config = DashboardConfig::resolve(api_url)?;
    init_stderr_logging(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let api = DashboardApi::with_reqwest(config.api_url.clone());
    let report = runtime.block_on(run_probe(&api));

    display_probe_report(&report);

    if report.is_connected() {
        Ok(())
    } else {
        Err(eyre!("API unreachable at {}", config.api_url))
    }
}
