//! Status Indicator Component
//!
//! One-line spinner, success, error and info indicators.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::Palette;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame (16ms ticks)
const TICKS_PER_FRAME: u64 = 8;

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner {
        /// Message to display (e.g., "Loading posts...")
        message: String,
        /// App tick count; selects the frame
        tick: u64,
    },
    Success { message: String },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            tick,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the spinner character for an app tick count
pub fn get_spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Render a status indicator as a single line
pub fn render_status_indicator(indicator: &StatusIndicatorType, palette: &Palette) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, tick } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*tick)),
                Style::default().fg(palette.accent),
            ),
            Span::styled(message.clone(), Style::default().fg(palette.muted)),
        ]),
        StatusIndicatorType::Success { message } => Line::from(vec![
            Span::styled("\u{2713} ", Style::default().fg(palette.success)),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Error { message } => Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(palette.error)),
            Span::styled(message.clone(), Style::default().fg(palette.error)),
        ]),
        StatusIndicatorType::Info { message } => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(palette.muted),
        )),
    }
}
