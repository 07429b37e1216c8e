const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens transcript or query text for log lines. Long text is cut at a
/// character boundary with the full length appended.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.chars().count() <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", visible, trimmed.chars().count())
}
