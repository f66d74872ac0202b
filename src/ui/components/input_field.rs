//! Input Field Component
//!
//! A single-line text input with focus handling and placeholder text. The
//! label sits in the top border to keep the form compact.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_INPUT_BG};

/// Block cursor drawn after the value when focused
const CURSOR: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed in the top border
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Trailing slice of `value` that fits in `width` columns.
///
/// Typing past the edge keeps the end of the text (where the cursor is)
/// visible instead of the start.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, ch) in value.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

/// Render an input field and return the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let box_area = Rect {
        height: area.height.min(3),
        ..area
    };

    let border_color = if config.focused {
        COLOR_FOCUS
    } else {
        COLOR_BORDER
    };
    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(format!(" {} ", config.label), label_style))
        .style(Style::default().bg(COLOR_INPUT_BG));

    // Inner width minus one column reserved for the cursor
    let text_width = (box_area.width.saturating_sub(2) as usize).saturating_sub(1);

    let content = match (config.value.is_empty(), config.placeholder) {
        (true, Some(placeholder)) if !config.focused => Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(COLOR_DIM),
        )),
        _ => {
            let mut spans = vec![Span::styled(
                visible_tail(config.value, text_width).to_string(),
                if config.focused {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                },
            )];
            if config.focused {
                spans.push(Span::styled(
                    CURSOR.to_string(),
                    Style::default().fg(Color::White),
                ));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(content).block(block), box_area);
    box_area.height
}

// ============================================================================
// Tests
// ============================================================================
