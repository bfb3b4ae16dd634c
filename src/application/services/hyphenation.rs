const HYPHEN_MARKS: [char; 3] = ['-', '\u{00AD}', '¬'];

/// True when `word` ends in a hyphen mark preceded by a letter.
pub fn is_line_end_hyphen(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(mark), Some(prev)) => HYPHEN_MARKS.contains(&mark) && prev.is_alphabetic(),
        _ => false,
    }
}

pub fn strip_trailing_hyphen(word: &str) -> &str {
    word.strip_suffix(|c: char| HYPHEN_MARKS.contains(&c)).unwrap_or(word)
}

/// Joins tokens already in reading order.
///
/// A flagged token is glued to its successor without the hyphen; all other
/// neighbours are separated by one space. A flagged final token is kept
/// unchanged.
pub fn join_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let mut out = String::new();
    let mut pending: Option<&str> = None;

    for (text, hyphenated) in tokens {
        if text.is_empty() {
            continue;
        }

        match pending.take() {
            Some(head) => out.push_str(strip_trailing_hyphen(head)),
            None if !out.is_empty() => out.push(' '),
            None => {}
        }

        if hyphenated {
            pending = Some(text);
        } else {
            out.push_str(text);
        }
    }

    if let Some(head) = pending {
        out.push_str(head);
    }

    out
}
