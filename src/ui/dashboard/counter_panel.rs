//! Counter panel

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use super::context::RenderContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

pub const TITLE: &str = " Counter ";
pub const HINT: &str = "Counter value is stored in Redis (if connected)";

pub fn counter_lines(ctx: &RenderContext) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            ctx.state.counter.to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("[+] ", Style::default().fg(COLOR_ACCENT)),
            Span::raw("Increment"),
        ]),
        Line::from(Span::styled(HINT, Style::default().fg(COLOR_DIM))),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(TITLE);

    let body = Paragraph::new(counter_lines(ctx))
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DashboardState;

    #[test]
    fn test_counter_value_first() {
        let mut state = DashboardState::new();
        state.apply_counter(Ok(42));

        let lines = counter_lines(&RenderContext::new(&state, "http://x"));
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(first, "42");
        let last: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(last, HINT);
    }
}
