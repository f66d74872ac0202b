//! UI rendering for the dashboard
//!
//! Rendering is a pure function of [`App`]: every frame is rebuilt from the
//! store through a borrowed [`RenderContext`].

pub mod components;
pub mod dashboard;
pub mod theme;

pub use dashboard::{render_dashboard, RenderContext};

use ratatui::Frame;

use crate::app::App;

/// Render the full screen for the current app state
pub fn render(frame: &mut Frame, app: &App) {
    let ctx = RenderContext::from_app(app);
    render_dashboard(frame, frame.area(), &ctx);
}
