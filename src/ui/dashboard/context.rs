//! Render context for dashboard components
//!
//! Borrowed view of everything a frame needs. Rendering never mutates the
//! app, so the render phase can run against a plain `DashboardState` in
//! tests and benchmarks.

use crate::app::{App, Focus};
use crate::state::DashboardState;

/// Context passed to every dashboard panel renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Store snapshot for this frame
    pub state: &'a DashboardState,
    /// Backend base URL (shown in the status panel and footer)
    pub api_url: &'a str,
    /// Keyboard focus, drives input highlighting and footer hints
    pub focus: Focus,
    /// Animation tick for the loading spinner
    pub tick: u64,
}

impl<'a> RenderContext<'a> {
    pub fn new(state: &'a DashboardState, api_url: &'a str) -> Self {
        Self {
            state,
            api_url,
            focus: Focus::default(),
            tick: 0,
        }
    }

    pub fn from_app(app: &'a App) -> Self {
        Self::new(&app.state, app.api_url())
            .with_focus(app.focus)
            .with_tick(app.tick_count)
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Spinner frame for the current tick
    pub fn spinner_frame(&self) -> usize {
        self.tick as usize
    }
}
