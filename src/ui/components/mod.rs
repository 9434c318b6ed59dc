//! Reusable UI Components
//!
//! - `InputField` - single-row labelled text input
//! - `StatusIndicator` - spinner, success, error and info lines

mod input_field;
mod status_indicator;

pub use input_field::{render_input_field, InputFieldConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
