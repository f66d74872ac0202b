//! One-line error banner under the header.
//!
//! While disconnected the status panel carries the error itself; the banner
//! only appears for failures that happen while the API is reachable.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::context::RenderContext;
use crate::ui::theme::COLOR_ERROR;

pub fn banner_line(ctx: &RenderContext) -> Option<Line<'static>> {
    if !ctx.state.is_connected() {
        return None;
    }
    let message = ctx.state.error_message()?;
    Some(Line::from(vec![
        Span::styled(
            "! ",
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(COLOR_ERROR)),
    ]))
}

/// Rows the banner needs: 1 when shown, else 0
pub fn banner_height(ctx: &RenderContext) -> u16 {
    u16::from(banner_line(ctx).is_some())
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    if let Some(line) = banner_line(ctx) {
        frame.render_widget(Paragraph::new(line), area);
    }
}
