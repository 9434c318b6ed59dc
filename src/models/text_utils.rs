//! Text helpers for rendering server data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// "1 comment" / "N comments".
pub fn pluralize_comments(count: u32) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{} comments", count)
    }
}

/// Parsed server timestamp. Times are shown in the offset the server sent.
enum Timestamp {
    Full(NaiveDateTime),
    DateOnly(NaiveDate),
}

fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Timestamp::Full(dt.naive_local()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Timestamp::Full(dt));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(Timestamp::DateOnly)
}

/// Format a server timestamp as a date, e.g. "Jan 1, 2024".
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(Timestamp::Full(dt)) => dt.format("%b %-d, %Y").to_string(),
        Some(Timestamp::DateOnly(d)) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Format a server timestamp with its time, e.g. "Jan 1, 2024 at 14:05".
pub fn format_date_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(Timestamp::Full(dt)) => dt.format("%b %-d, %Y at %H:%M").to_string(),
        Some(Timestamp::DateOnly(d)) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Truncate to a display width, appending "…" when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Collapse all whitespace runs (including newlines) into single spaces.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap to a display width, at most `max_lines` lines.
///
/// The last line is truncated with "…" when text remains.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let words: Vec<&str> = text.split_whitespace().collect();

    for (i, word) in words.iter().enumerate() {
        let candidate_width = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if candidate_width <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            let last = lines.pop().unwrap_or_default();
            lines.push(truncate_to_width(&format!("{} {}", last, words[i..].join(" ")), width));
            return lines;
        }
        current = word.to_string();
        if current.width() > width {
            current = truncate_to_width(&current, width);
        }
    }

    if !current.is_empty() {
        if lines.len() == max_lines {
            let last = lines.pop().unwrap_or_default();
            lines.push(truncate_to_width(&format!("{} {}", last, current), width));
        } else {
            lines.push(current);
        }
    }
    lines
}
