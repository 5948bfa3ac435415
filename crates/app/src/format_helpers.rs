/// Formatting helpers for result cards and the preview dialog.
use chrono::{DateTime, Utc};

/// Format a timestamp as "May 8, 2025".
pub fn format_date_human(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as "May 8, 2025 9:30 AM" (12-hour clock, UTC).
pub fn format_datetime_human(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Shorten `text` to at most `max_chars` characters, appending an ellipsis
/// when anything was cut. Cuts on a word boundary when one is close.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let boundary = cut
        .char_indices()
        .enumerate()
        .filter(|(_, (_, c))| c.is_whitespace())
        .last()
        .filter(|(chars_before, _)| *chars_before >= max_chars / 2)
        .map(|(_, (byte, _))| byte);
    let cut = match boundary {
        Some(byte) => &cut[..byte],
        None => cut.as_str(),
    };
    format!("{}\u{2026}", cut.trim_end())
}

/// Pluralized result count, e.g. "1 citation" or "3 citations".
pub fn citation_count_label(count: usize) -> String {
    if count == 1 {
        "1 citation".to_string()
    } else {
        format!("{count} citations")
    }
}
