//! Comment list: a pure rendering of comments in the order given.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::text_utils::{clamp_lines, format_date_time};
use crate::models::Comment;

use super::theme::Palette;

pub const FLAGGED_BADGE: &str = "Flagged for Review";

/// Longest comment text shown per card, in lines.
const MAX_TEXT_LINES: usize = 4;

fn card_lines(comment: &Comment, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            comment.author.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", format_date_time(&comment.created_at)),
            Style::default().fg(palette.muted),
        ),
    ])];
    for text in clamp_lines(&comment.text, width, MAX_TEXT_LINES) {
        lines.push(Line::from(Span::styled(text, Style::default().fg(palette.text))));
    }
    lines
}

/// Render `comments`, skipping the first `skip`. Cards that do not fit are
/// cut off at the bottom of `area`.
pub fn render_comment_list(frame: &mut Frame, area: Rect, comments: &[Comment], skip: usize, palette: &Palette) {
    let inner_width = usize::from(area.width).saturating_sub(4);
    let mut y = area.y;
    let bottom = area.y + area.height;

    for comment in comments.iter().skip(skip) {
        if y >= bottom {
            break;
        }
        let lines = card_lines(comment, inner_width, palette);
        let wanted = lines.len() as u16 + 2;
        let height = wanted.min(bottom - y);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border));
        if comment.flagged {
            block = block
                .border_style(Style::default().fg(palette.flagged))
                .title(Span::styled(
                    format!(" {} ", FLAGGED_BADGE),
                    Style::default().fg(palette.flagged).add_modifier(Modifier::BOLD),
                ));
        }

        let card = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        frame.render_widget(Paragraph::new(lines).block(block), card);
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;
    use ratatui::{backend::TestBackend, Terminal};

    fn comment(id: u64, author: &str, text: &str, flagged: bool) -> Comment {
        Comment {
            id,
            post: 1,
            author: author.to_string(),
            text: text.to_string(),
            flagged,
            created_at: "2024-03-15T09:30:00Z".to_string(),
        }
    }

    fn render(comments: &[Comment], skip: usize) -> (String, Terminal<TestBackend>) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_comment_list(f, area, comments, skip, &DARK)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        (out, terminal)
    }

    #[test]
    fn test_order_is_preserved() {
        let comments = vec![
            comment(2, "Zed", "later", false),
            comment(1, "Amy", "earlier", false),
        ];
        let (screen, _) = render(&comments, 0);
        let zed = screen.find("Zed").unwrap();
        let amy = screen.find("Amy").unwrap();
        assert!(zed < amy);
        assert!(screen.contains("Mar 15, 2024 at 09:30"));
    }

    #[test]
    fn test_flagged_badge_and_border() {
        let comments = vec![comment(1, "Troll", "buy spam", true), comment(2, "Nice", "hello", false)];
        let (screen, terminal) = render(&comments, 0);
        assert_eq!(screen.matches(FLAGGED_BADGE).count(), 1);

        // Top-left corner of the first (flagged) card.
        let corner = &terminal.backend().buffer()[(0, 0)];
        assert_eq!(corner.fg, DARK.flagged);
    }

    #[test]
    fn test_skip() {
        let comments = vec![comment(1, "First", "a", false), comment(2, "Second", "b", false)];
        let (screen, _) = render(&comments, 1);
        assert!(!screen.contains("First"));
        assert!(screen.contains("Second"));
    }
}
