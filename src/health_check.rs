//! Headless API probe for `--check`.
//!
//! Runs the same three fetches the dashboard issues on mount, folds them into
//! a [`DashboardState`] with the same rules the TUI uses, and prints a plain
//! text summary instead of starting the TUI.

use std::time::Instant;

use tracing::info;

use crate::api::DashboardApi;
use crate::state::DashboardState;

/// Result of a probe run
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub api_url: String,
    pub state: DashboardState,
    pub elapsed_ms: u64,
}

impl ProbeReport {
    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// Plain-text summary, one fact per line
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        match &self.state.health {
            Some(health) => {
                out.push_str(&format!(
                    "✓ API responding at {} ({}ms)\n",
                    self.api_url, self.elapsed_ms
                ));
                out.push_str(&format!("  Redis: {}\n", health.backing_store));
                out.push_str(&format!("  Uptime: {}\n", health.uptime_display()));
            }
            None => {
                out.push_str(&format!("✗ Cannot connect to API at {}\n", self.api_url));
            }
        }

        out.push_str(&format!("  Counter: {}\n", self.state.counter));
        out.push_str(&format!("  Users: {}\n", self.state.users.len()));

        if let Some(message) = self.state.error_message() {
            out.push_str(&format!("  Error: {}\n", message));
        }

        out
    }
}

/// Probe the API once. All three requests run concurrently and every
/// outcome is folded into the report; nothing here fails.
pub async fn run_probe(api: &DashboardApi) -> ProbeReport {
    let start = Instant::now();
    let mut state = DashboardState::new();
    state.begin_users_fetch();

    let (health, users, counter) = tokio::join!(api.health(), api.users(), api.counter());
    let elapsed_ms = start.elapsed().as_millis() as u64;

    state.apply_health(health);
    state.apply_users(users);
    state.apply_counter(counter);

    info!(
        api_url = %api.base_url(),
        connected = state.is_connected(),
        elapsed_ms,
        "probe finished"
    );

    ProbeReport {
        api_url: api.base_url().to_string(),
        state,
        elapsed_ms,
    }
}

/// Print probe results to stdout
pub fn display_probe_report(report: &ProbeReport) {
    println!();
    print!("{}", report.render_text());
    println!();
}
