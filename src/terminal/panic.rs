//! Panic hook for terminal restoration.
//!
//! Restores the terminal and records the panic in the log file before the
//! previous hook (color-eyre's) prints the report.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call after `color_eyre::install()` so its hook is the one chained to,
/// and before creating the `TerminalManager`.
///
/// ```no_run
/// use devdash::terminal::setup_panic_hook;
///
/// color_eyre::install().unwrap();
/// setup_panic_hook();
/// ```
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state first
        emergency_restore();

        tracing::error!(panic = %panic_info, "dashboard panicked");

        original_hook(panic_info);
    }));
}
