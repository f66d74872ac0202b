//! Terminal lifecycle for the dashboard.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and puts it back exactly once, either through [`TerminalManager::restore`]
//! or on drop. The panic hook from [`setup_panic_hook`] covers the path where
//! drop never runs.
//!
//! ```no_run
//! use devdash::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     manager.restore()
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal while the dashboard is on screen.
pub struct TerminalManager {
    terminal: DashboardTerminal,
    restored: bool,
}

impl TerminalManager {
    /// Enter raw mode, switch to the alternate screen with bracketed paste
    /// enabled, and clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            // Raw mode is already on; do not leave the shell unusable
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut DashboardTerminal {
        &mut self.terminal
    }

    /// Leave the alternate screen and show the cursor. Later calls, and the
    /// drop that follows, do nothing.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if !self.restored {
            self.restored = true;
            leave_tui_mode(self.terminal.backend_mut());
        }
    }
}
