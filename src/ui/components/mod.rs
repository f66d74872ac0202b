//! Reusable UI Components
//!
//! - `InputField` - Text input with focus handling and placeholder
//! - `StatusIndicator` - Spinner, success, failure and info lines

mod input_field;
mod status_indicator;

pub use input_field::{render_input_field, visible_tail, InputFieldConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
