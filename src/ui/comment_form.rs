//! "Add a Comment" form.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::{CommentForm, FormField, FormPhase};

use super::components::{render_input_field, render_status_indicator, InputFieldConfig, StatusIndicatorType};
use super::theme::Palette;

/// Rows used by the form, borders included.
pub const FORM_HEIGHT: u16 = 6;

pub fn render_comment_form(
    frame: &mut Frame,
    area: Rect,
    form: &CommentForm,
    focused: bool,
    tick: u64,
    palette: &Palette,
) {
    let border = if focused { palette.accent } else { palette.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " Add a Comment ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [author_area, _, text_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let locked = form.is_locked();
    let author = InputFieldConfig::new("Name:   ", &form.author)
        .focused(focused && form.field == FormField::Author)
        .disabled(locked)
        .placeholder("Your name");
    // One row for the field: line breaks are drawn as a return glyph.
    let text_shown = form.text.replace('\n', " \u{21B5} ");
    let text = InputFieldConfig::new("Comment:", &text_shown)
        .focused(focused && form.field == FormField::Text)
        .disabled(locked)
        .placeholder("Share your thoughts...");
    render_input_field(frame, author_area, &author, palette);
    render_input_field(frame, text_area, &text, palette);

    let status = if let Some(error) = &form.error {
        StatusIndicatorType::error(error.clone())
    } else {
        match form.phase {
            FormPhase::Submitting => StatusIndicatorType::spinner("Submitting...", tick),
            FormPhase::Succeeded => StatusIndicatorType::success(form.success_message().unwrap_or_default()),
            FormPhase::Idle if focused => StatusIndicatorType::info("Enter to submit, Alt+Enter for a new line"),
            FormPhase::Idle => StatusIndicatorType::info("Tab to write a comment"),
        }
    };
    frame.render_widget(Paragraph::new(render_status_indicator(&status, palette)), status_area);
}
