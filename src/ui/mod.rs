//! UI rendering.
//!
//! Every frame is painted from the current [`Palette`]: a header with the
//! branding and theme indicator, the mounted screen, and a footer with the
//! key hints for the current input context.

mod comment_form;
mod comment_list;
pub mod components;
mod moderator;
mod post_detail;
mod post_list;
pub mod theme;

pub use theme::Palette;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};
use crate::input::InputContext;

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.context.theme().palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, app, &palette);

    let body = inset(body, 1);
    match &app.view {
        View::PostList(state) => post_list::render_post_list(frame, body, state, app.tick_count, &palette),
        View::PostDetail(state) => post_detail::render_post_detail(frame, body, state, app.tick_count, &palette),
        View::Moderator(state) => moderator::render_moderator(frame, body, state, app.tick_count, &palette),
    }

    render_footer(frame, footer, InputContext::from_app(app), &palette);
}

/// Shrink an area horizontally by `margin` columns on each side.
fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin.min(area.width / 2),
        y: area.y,
        width: area.width.saturating_sub(margin * 2),
        height: area.height,
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mode = if app.context.theme().is_dark() {
        "\u{25CF} Dark"
    } else {
        "\u{25CB} Light"
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(mode.chars().count() as u16 + 1)])
            .areas(inset(inner, 1));

    let branding = Paragraph::new(vec![
        Line::from(Span::styled(
            "Smart Alec",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "AI-Powered Comment Moderation",
            Style::default().fg(palette.muted),
        )),
    ]);
    frame.render_widget(branding, left);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(mode, Style::default().fg(palette.muted)))),
        right,
    );
}

fn key_hints(context: InputContext) -> &'static [(&'static str, &'static str)] {
    match context {
        InputContext::PostList => &[
            ("↑↓", "select"),
            ("Enter", "open"),
            ("/", "search"),
            ("m", "moderator"),
            ("r", "reload"),
            ("t", "theme"),
            ("q", "quit"),
        ],
        InputContext::PostSearch => &[("Enter", "search"), ("Esc", "cancel")],
        InputContext::DetailComments => &[
            ("Esc", "back"),
            ("Tab", "comment"),
            ("↑↓", "scroll"),
            ("r", "reload"),
            ("t", "theme"),
        ],
        InputContext::DetailForm => &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("Esc", "back"),
        ],
        InputContext::Moderator => &[
            ("↑↓", "select"),
            ("a", "approve"),
            ("d", "remove"),
            ("Enter", "view post"),
            ("Esc", "back"),
        ],
    }
}

fn render_footer(frame: &mut Frame, area: Rect, context: InputContext, palette: &Palette) {
    let mut spans = Vec::new();
    for (i, (key, action)) in key_hints(context).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(*key, Style::default().fg(palette.accent)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(palette.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inset(area, 1));
}
