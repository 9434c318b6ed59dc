//! Post detail screen: the post, the comment form, then its comments.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::text_utils::{clamp_lines, format_date};
use crate::models::Post;
use crate::state::PostDetailState;

use super::comment_form::{render_comment_form, FORM_HEIGHT};
use super::comment_list::render_comment_list;
use super::components::{render_status_indicator, StatusIndicatorType};
use super::theme::Palette;

pub const BACK_HINT: &str = "\u{2190} Back to posts (Esc)";
pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";

/// Body lines shown above the form.
const MAX_BODY_LINES: usize = 10;

pub fn render_post_detail(frame: &mut Frame, area: Rect, state: &PostDetailState, tick: u64, palette: &Palette) {
    let [back_area, _, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(BACK_HINT, Style::default().fg(palette.accent)))),
        back_area,
    );

    if let Some(error) = state.error_text() {
        let line = render_status_indicator(&StatusIndicatorType::error(error), palette);
        frame.render_widget(Paragraph::new(line), content);
        return;
    }

    match state.current_post() {
        Some(post) => render_loaded(frame, content, state, post, tick, palette),
        None => {
            let line = render_status_indicator(&StatusIndicatorType::spinner("Loading post...", tick), palette);
            frame.render_widget(Paragraph::new(line), content);
        }
    }
}

fn body_lines(body: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in body.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(clamp_lines(paragraph, width, MAX_BODY_LINES));
        }
        if lines.len() >= MAX_BODY_LINES {
            break;
        }
    }
    lines.truncate(MAX_BODY_LINES);
    lines
}

fn render_loaded(
    frame: &mut Frame,
    area: Rect,
    state: &PostDetailState,
    post: &Post,
    tick: u64,
    palette: &Palette,
) {
    let body = body_lines(&post.body, usize::from(area.width));

    let [title_area, meta_area, _, body_area, _, heading_area, form_area, _, comments_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(body.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true }),
        title_area,
    );

    let mut meta = vec![Span::styled(
        format!("Posted on {}", format_date(&post.created_at)),
        Style::default().fg(palette.muted),
    )];
    if state.refreshing {
        meta.push(Span::raw("  "));
        meta.extend(render_status_indicator(&StatusIndicatorType::spinner("Refreshing...", tick), palette).spans);
    }
    frame.render_widget(Paragraph::new(Line::from(meta)), meta_area);

    let body: Vec<Line> = body
        .into_iter()
        .map(|text| Line::from(Span::styled(text, Style::default().fg(palette.text))))
        .collect();
    frame.render_widget(Paragraph::new(body), body_area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Comments ({})", post.comment_count),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))),
        heading_area,
    );

    render_comment_form(frame, form_area, &state.form, state.focus.is_form(), tick, palette);

    let comments = post.comments();
    if comments.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(NO_COMMENTS, Style::default().fg(palette.muted)))),
            comments_area,
        );
    } else {
        render_comment_list(frame, comments_area, comments, usize::from(state.scroll), palette);
    }
}
