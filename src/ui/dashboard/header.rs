//! Dashboard header component
//!
//! Centered title inside a bottom-bordered strip.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_HEADER};

pub const TITLE: &str = "DevOps Learning Dashboard";

/// Rows the header occupies (title + bottom border)
pub const HEADER_HEIGHT: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(title, area);
}
