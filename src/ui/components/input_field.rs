//! Input Field Component
//!
//! A single-row labelled text input with focus and disabled styling.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Palette;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label shown left of the value
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether the input is read-only (e.g. while submitting)
    pub disabled: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            disabled: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Keep the end of `value` that fits in `width` columns (the cursor end).
fn visible_tail(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }
    let mut start = value.len();
    for (idx, _) in value.char_indices() {
        if value[idx..].width() <= width {
            start = idx;
            break;
        }
    }
    &value[start..]
}

/// Render an input field in a single row of `area`.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig, palette: &Palette) {
    let label_style = if config.focused {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };

    let label = format!("{} ", config.label);
    let cursor_width = usize::from(config.focused);
    let value_width = usize::from(area.width)
        .saturating_sub(label.width())
        .saturating_sub(cursor_width);

    let mut spans = vec![Span::styled(label, label_style)];
    if config.value.is_empty() {
        if let Some(placeholder) = config.placeholder {
            if !config.focused {
                spans.push(Span::styled(
                    placeholder.to_string(),
                    Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
                ));
            }
        }
    } else {
        let value_style = if config.disabled {
            Style::default().fg(palette.muted)
        } else {
            Style::default().fg(palette.text)
        };
        spans.push(Span::styled(
            visible_tail(config.value, value_width).to_string(),
            value_style,
        ));
    }
    if config.focused && !config.disabled {
        spans.push(Span::styled("\u{2588}", Style::default().fg(palette.accent)));
    }

    let field = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.input_bg));
    frame.render_widget(field, area);
}
