//! API status panel
//!
//! Connected requires a health snapshot. The error message belongs to the
//! disconnected state; failures while connected go to the banner.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use super::context::RenderContext;
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

pub const TITLE: &str = " API Status ";

/// Build the panel body
pub fn connection_lines(ctx: &RenderContext) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match &ctx.state.health {
        Some(health) => {
            lines.push(render_status_indicator(&StatusIndicatorType::success(
                "Connected",
            )));
            lines.push(labelled("API", ctx.api_url));
            lines.push(labelled("Redis", &health.backing_store));
            lines.push(labelled("Uptime", &health.uptime_display()));
        }
        None => {
            lines.push(render_status_indicator(&StatusIndicatorType::failure(
                "Disconnected",
            )));
            lines.push(Line::from(Span::styled(
                format!("Cannot connect to API at {}", ctx.api_url),
                Style::default().fg(COLOR_DIM),
            )));
            if let Some(message) = ctx.state.error_message() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(COLOR_ERROR),
                )));
            }
        }
    }

    lines
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
        Span::raw(value.to_string()),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(TITLE);

    let body = Paragraph::new(connection_lines(ctx))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::HealthSnapshot;
    use crate::state::DashboardState;

    const BASE: &str = "http://localhost:3000";

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_connected_lines() {
        let mut state = DashboardState::new();
        state.apply_health(Ok(HealthSnapshot::new("connected", 125.7)));

        let lines = text(&connection_lines(&RenderContext::new(&state, BASE)));
        assert_eq!(
            lines,
            vec![
                "● Connected",
                "API: http://localhost:3000",
                "Redis: connected",
                "Uptime: 126s",
            ]
        );
    }

    #[test]
    fn test_disconnected_lines_include_error() {
        let mut state = DashboardState::new();
        state.apply_health(Err(ApiError::Rejected));

        let lines = text(&connection_lines(&RenderContext::new(&state, BASE)));
        assert_eq!(lines[0], "● Disconnected");
        assert_eq!(lines[1], "Cannot connect to API at http://localhost:3000");
        assert_eq!(lines.last().map(String::as_str), Some("Failed to connect to API"));
    }

    #[test]
    fn test_disconnected_without_error_before_first_settlement() {
        let state = DashboardState::new();
        let lines = text(&connection_lines(&RenderContext::new(&state, BASE)));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_connected_block_omits_error() {
        let mut state = DashboardState::new();
        state.apply_health(Ok(HealthSnapshot::new("connected", 1.0)));
        state.apply_users(Err(ApiError::Rejected));

        let lines = text(&connection_lines(&RenderContext::new(&state, BASE)));
        assert_eq!(lines.len(), 4);
        assert!(!lines.iter().any(|l| l.contains("Failed to fetch users")));
    }
}
