//! Moderator dashboard: statistics and the flagged-comment queue.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::text_utils::{clamp_lines, format_date_time};
use crate::models::{Comment, FlaggedStats};
use crate::state::{Fetch, ModeratorState};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::theme::Palette;

pub const EMPTY_QUEUE: &str = "All clear! No comments flagged for review.";

const MAX_TEXT_LINES: usize = 3;

pub fn render_moderator(frame: &mut Frame, area: Rect, state: &ModeratorState, tick: u64, palette: &Palette) {
    let [title_area, stats_area, _, notice_area, list_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Moderator Dashboard",
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Review comments flagged by the AI moderator",
                Style::default().fg(palette.muted),
            )),
        ]),
        title_area,
    );

    // Statistics stay visible (as zeros) while loading or after a failure.
    render_stats(frame, stats_area, &state.stats(), palette);

    let banner = match (&state.flagged, &state.notice) {
        (Fetch::Failed(message), _) => Some(StatusIndicatorType::error(message.clone())),
        (_, Some(notice)) => Some(StatusIndicatorType::info(notice.clone())),
        _ => None,
    };
    if let Some(banner) = banner {
        frame.render_widget(Paragraph::new(render_status_indicator(&banner, palette)), notice_area);
    }

    match &state.flagged {
        Fetch::Loading => {
            let line = render_status_indicator(
                &StatusIndicatorType::spinner("Loading flagged comments...", tick),
                palette,
            );
            frame.render_widget(Paragraph::new(line), list_area);
        }
        Fetch::Failed(_) => {}
        Fetch::Loaded(comments) if comments.is_empty() => {
            let line = render_status_indicator(&StatusIndicatorType::success(EMPTY_QUEUE), palette);
            frame.render_widget(Paragraph::new(line), list_area);
        }
        Fetch::Loaded(comments) => render_queue(frame, list_area, comments, state, palette),
    }
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &FlaggedStats, palette: &Palette) {
    let cards = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let entries = [
        ("Flagged Comments", stats.total, palette.flagged),
        ("Potential Spam", stats.potential_spam, palette.warning),
        ("Posts Affected", stats.posts_affected, palette.accent),
    ];
    for ((label, value, color), card) in entries.into_iter().zip(cards.iter()) {
        render_stat_card(frame, *card, label, value, color, palette);
    }
}

fn render_stat_card(frame: &mut Frame, area: Rect, label: &str, value: usize, color: Color, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label.to_string(), Style::default().fg(palette.muted))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_queue(frame: &mut Frame, area: Rect, comments: &[Comment], state: &ModeratorState, palette: &Palette) {
    let width = usize::from(area.width).saturating_sub(2);

    let mut lines = Vec::new();
    let mut selected_row = 0;
    for (i, comment) in comments.iter().enumerate() {
        let selected = i == state.selected;
        if selected {
            selected_row = lines.len();
        }
        lines.extend(queue_row(comment, selected, state.pending == Some(comment.id), width, palette));
    }

    // Keep the selected row on screen.
    let skip = selected_row.saturating_sub(usize::from(area.height) / 2);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn queue_row(comment: &Comment, selected: bool, pending: bool, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let marker = if selected { "\u{258C} " } else { "  " };
    let marker_span = || Span::styled(marker, Style::default().fg(palette.accent));

    let mut lines = vec![Line::from(vec![
        marker_span(),
        Span::styled(
            comment.author.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            " Flagged ",
            Style::default()
                .fg(palette.background)
                .bg(palette.flagged)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", format_date_time(&comment.created_at)),
            Style::default().fg(palette.muted),
        ),
    ])];

    for text in clamp_lines(&comment.text, width, MAX_TEXT_LINES) {
        lines.push(Line::from(vec![
            marker_span(),
            Span::styled(text, Style::default().fg(palette.text)),
        ]));
    }

    let mut footer = vec![
        marker_span(),
        Span::styled(format!("On post #{}", comment.post), Style::default().fg(palette.muted)),
        Span::raw("   "),
    ];
    if pending {
        footer.push(Span::styled("Working\u{2026}", Style::default().fg(palette.muted)));
    } else if selected {
        footer.push(Span::styled("[a] Approve", Style::default().fg(palette.success)));
        footer.push(Span::raw("  "));
        footer.push(Span::styled("[d] Remove", Style::default().fg(palette.error)));
    }
    lines.push(Line::from(footer));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::state::moderator::{ACTIONS_DISABLED, FLAGGED_LOAD_ERROR};
    use crate::state::ViewLifetimes;
    use crate::ui::test_support::{create_test_app, render_to_string};

    fn flagged(id: u64, post: u64, text: &str) -> Comment {
        Comment {
            id,
            post,
            author: format!("user{}", id),
            text: text.to_string(),
            flagged: true,
            created_at: "2024-02-01T12:00:00Z".to_string(),
        }
    }

    fn render_state(setup: impl FnOnce(&mut ModeratorState)) -> String {
        let mut app = create_test_app(false);
        let mut state = ModeratorState::new(ViewLifetimes::new().mount());
        setup(&mut state);
        app.view = View::Moderator(state);
        render_to_string(&app, 100, 40)
    }

    #[test]
    fn test_stats_cards() {
        let screen = render_state(|s| {
            s.apply_loaded(vec![
                flagged(1, 10, "Buy SPAM now"),
                flagged(2, 10, "rude"),
                flagged(3, 11, "more spam"),
            ])
        });
        assert!(screen.contains("Moderator Dashboard"));

        let total = screen.find("Flagged Comments").unwrap();
        let spam = screen.find("Potential Spam").unwrap();
        let posts = screen.find("Posts Affected").unwrap();
        assert!(total < spam && spam < posts);

        let values_row = screen.lines().find(|l| l.contains('3') && l.contains('2')).unwrap();
        let digits: Vec<char> = values_row.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, vec!['3', '2', '2']);
    }

    #[test]
    fn test_rows() {
        let screen = render_state(|s| s.apply_loaded(vec![flagged(7, 42, "suspicious text")]));
        assert!(screen.contains("user7"));
        assert!(screen.contains("Flagged"));
        assert!(screen.contains("Feb 1, 2024 at 12:00"));
        assert!(screen.contains("suspicious text"));
        assert!(screen.contains("On post #42"));
        assert!(screen.contains("[a] Approve"));
        assert!(screen.contains("[d] Remove"));
    }

    #[test]
    fn test_empty_queue() {
        let screen = render_state(|s| s.apply_loaded(vec![]));
        assert!(screen.contains(EMPTY_QUEUE));
    }

    #[test]
    fn test_error_keeps_zero_stats() {
        let screen = render_state(|s| s.apply_failed());
        assert!(screen.contains(FLAGGED_LOAD_ERROR));
        assert!(screen.contains("Flagged Comments"));
        assert!(!screen.contains(EMPTY_QUEUE));
    }

    #[test]
    fn test_loading_and_notice() {
        let screen = render_state(|_| {});
        assert!(screen.contains("Loading flagged comments..."));

        let screen = render_state(|s| {
            s.apply_loaded(vec![flagged(1, 1, "x")]);
            s.actions_disabled();
        });
        assert!(screen.contains(ACTIONS_DISABLED));
    }

    #[test]
    fn test_pending_row() {
        let screen = render_state(|s| {
            s.apply_loaded(vec![flagged(1, 1, "x")]);
            s.begin_action(1);
        });
        assert!(screen.contains("Working\u{2026}"));
        assert!(!screen.contains("[a] Approve"));
    }
}
