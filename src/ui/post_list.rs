//! Post list screen.
//!
//! Each card shows only server-supplied aggregates: `comment_count` and,
//! when non-zero, the `flagged_comment_count` badge.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::text_utils::{clamp_lines, format_date, pluralize_comments, single_line, truncate_to_width};
use crate::models::Post;
use crate::state::{Fetch, PostListState};

use super::components::{render_input_field, render_status_indicator, InputFieldConfig, StatusIndicatorType};
use super::theme::Palette;

pub const EMPTY_MESSAGE: &str = "No posts yet. Check back later!";

/// Rows per post card, including the blank separator.
const CARD_HEIGHT: usize = 5;

pub fn render_post_list(frame: &mut Frame, area: Rect, state: &PostListState, tick: u64, palette: &Palette) {
    let [title_area, search_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(if state.is_searching() || state.active_query.is_some() { 2 } else { 0 }),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Recent Posts",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );

    if let Some(input) = &state.search_input {
        let config = InputFieldConfig::new("Search:", input)
            .focused(true)
            .placeholder("title or body");
        render_input_field(frame, Rect { height: 1, ..search_area }, &config, palette);
    } else if let Some(query) = &state.active_query {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Results for ", Style::default().fg(palette.muted)),
                Span::styled(format!("\"{}\"", query), Style::default().fg(palette.accent)),
            ])),
            search_area,
        );
    }

    match &state.posts {
        Fetch::Loading => {
            let line = render_status_indicator(&StatusIndicatorType::spinner("Loading posts...", tick), palette);
            frame.render_widget(Paragraph::new(line), list_area);
        }
        Fetch::Failed(message) => {
            let line = render_status_indicator(&StatusIndicatorType::error(message.clone()), palette);
            frame.render_widget(Paragraph::new(line), list_area);
        }
        Fetch::Loaded(posts) if posts.is_empty() => {
            let message = match &state.active_query {
                Some(query) => format!("No posts match \"{}\".", query),
                None => EMPTY_MESSAGE.to_string(),
            };
            let line = render_status_indicator(&StatusIndicatorType::info(message), palette);
            frame.render_widget(Paragraph::new(line), list_area);
        }
        Fetch::Loaded(posts) => {
            render_cards(frame, list_area, posts, state.selected, palette);
            if state.has_more {
                let shown = posts.len();
                let text = match state.total {
                    Some(total) => format!("Showing the first {} of {} posts", shown, total),
                    None => format!("Showing the first {} posts", shown),
                };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(palette.muted)))),
                    status_area,
                );
            }
        }
    }
}

fn render_cards(frame: &mut Frame, area: Rect, posts: &[Post], selected: usize, palette: &Palette) {
    let width = usize::from(area.width).saturating_sub(2);
    let height = usize::from(area.height);

    // Keep the selected card fully visible.
    let skip_rows = ((selected + 1) * CARD_HEIGHT).saturating_sub(height);
    let lines: Vec<Line> = posts
        .iter()
        .enumerate()
        .flat_map(|(i, post)| post_card(post, i == selected, width, palette))
        .skip(skip_rows)
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn post_card(post: &Post, selected: bool, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let (marker, bg) = if selected {
        ("\u{258C} ", Some(palette.highlight))
    } else {
        ("  ", None)
    };
    let with_bg = |style: Style| match bg {
        Some(color) => style.bg(color),
        None => style,
    };
    let marker_span = || Span::styled(marker, with_bg(Style::default().fg(palette.accent)));

    let mut lines = Vec::with_capacity(CARD_HEIGHT);
    lines.push(Line::from(vec![
        marker_span(),
        Span::styled(
            truncate_to_width(&post.title, width),
            with_bg(Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
        ),
    ]));

    let mut preview = clamp_lines(&single_line(&post.body), width, 2);
    preview.resize(2, String::new());
    for text in preview {
        lines.push(Line::from(vec![
            marker_span(),
            Span::styled(text, with_bg(Style::default().fg(palette.muted))),
        ]));
    }

    let mut meta = vec![
        marker_span(),
        Span::styled(
            pluralize_comments(post.comment_count),
            with_bg(Style::default().fg(palette.text)),
        ),
    ];
    if post.has_flagged_comments() {
        meta.push(Span::styled("  ", with_bg(Style::default())));
        meta.push(Span::styled(
            format!(" {} flagged ", post.flagged_comment_count),
            Style::default()
                .fg(palette.background)
                .bg(palette.flagged)
                .add_modifier(Modifier::BOLD),
        ));
    }
    meta.push(Span::styled(
        format!("  {}", format_date(&post.created_at)),
        with_bg(Style::default().fg(palette.muted)),
    ));
    lines.push(Line::from(meta));
    lines.push(Line::from(""));
    lines
}
