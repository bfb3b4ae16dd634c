const MAX_VISIBLE_CHARS: usize = 100;

/// Short, single-line preview of document text for log fields.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let flattened: String = trimmed
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let total = flattened.chars().count();
    if total > MAX_VISIBLE_CHARS {
        let prefix: String = flattened.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{prefix}... ({total} chars total)")
    } else {
        flattened
    }
}
