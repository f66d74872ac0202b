//! Status Indicator Component
//!
//! Renders single-line spinner, success, failure, and info indicators.
//! Used for the connection badge and the users loading state.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Filled circle used for connection state
const DOT: char = '\u{25CF}';

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner {
        /// Message to display (e.g., "Loading...")
        message: String,
        /// Current frame index (auto-cycles)
        frame: usize,
    },
    /// Green dot with message
    Success { message: String },
    /// Red dot with message
    Failure { message: String },
    /// Dim message, no marker
    Info { message: String },
}

impl StatusIndicatorType {
    /// Create a new spinner indicator at the given animation frame
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as a single line
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled(message.clone(), Style::default().fg(COLOR_LOADING)),
        ]),
        StatusIndicatorType::Success { message } => dot_line(message, COLOR_SUCCESS),
        StatusIndicatorType::Failure { message } => dot_line(message, COLOR_ERROR),
        StatusIndicatorType::Info { message } => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    }
}

fn dot_line(message: &str, color: ratatui::style::Color) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} {}", DOT, message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

// ============================================================================
// Tests
// ============================================================================
