//! Color theme constants for the dashboard
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel or input
pub const COLOR_FOCUS: Color = Color::White;

/// Accent color - cyan for values worth a glance (counter, user names)
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status Colors
// ============================================================================

/// Connected / success state - green #04B575
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Disconnected / error state - red
pub const COLOR_ERROR: Color = Color::Red;

/// Loading / in-progress state - yellow
pub const COLOR_LOADING: Color = Color::Yellow;
