//! Footer with focus-aware key hints and the API URL

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::context::RenderContext;
use crate::app::Focus;
use crate::ui::theme::COLOR_DIM;

/// Get key hints for the current focus
pub fn get_footer_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Panels => "r refresh status · u refresh users · + increment · a add user · q quit",
        Focus::Name | Focus::Email => "enter submit · tab next field · esc back · ctrl+c quit",
    }
}

pub fn api_url_label(ctx: &RenderContext) -> String {
    format!("API URL: {}", ctx.api_url)
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let url = api_url_label(ctx);
    let url_width = unicode_width::UnicodeWidthStr::width(url.as_str()) as u16;
    let [hint_area, url_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(url_width + 1)]).areas(area);

    let style = Style::default().fg(COLOR_DIM);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(get_footer_hint(ctx.focus), style))),
        hint_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(url, style))).right_aligned(),
        url_area,
    );
}
