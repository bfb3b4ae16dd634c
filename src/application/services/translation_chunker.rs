use crate::domain::TranslationSegment;

pub const DEFAULT_MAX_SEGMENT_CHARS: usize = 5000;

/// Splits `text` into segments of at most `max_chars` characters.
///
/// Each segment ends just after the last whitespace character that fits, so
/// whitespace stays with the preceding segment and concatenating all
/// segments yields `text` again. A run without whitespace is cut at the
/// limit on a character boundary.
pub fn split_into_segments(text: &str, max_chars: usize) -> Vec<TranslationSegment<'_>> {
    let max_chars = max_chars.max(1);
    let mut segments = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let end = segment_end(&text[start..], max_chars) + start;
        segments.push(TranslationSegment::new(segments.len(), text, start..end));
        start = end;
    }

    segments
}

/// Byte length of the next segment of `rest`.
fn segment_end(rest: &str, max_chars: usize) -> usize {
    let mut last_break = None;
    let mut taken = 0;

    for (offset, ch) in rest.char_indices() {
        if taken == max_chars {
            return last_break.unwrap_or(offset);
        }
        taken += 1;
        if ch.is_whitespace() {
            last_break = Some(offset + ch.len_utf8());
        }
    }

    rest.len()
}

/// Concatenates translated outputs in segment order.
///
/// Each item pairs a source segment with its translation. When a
/// translation lost the whitespace its source segment ended with, that
/// whitespace is restored so neighbouring segments never run together.
/// Otherwise a single space separates a changed translation from a
/// following output that does not start with whitespace. Outputs equal to
/// their sources reproduce the original text exactly.
pub fn reassemble<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut parts = parts.into_iter().peekable();
    let mut out = String::new();

    while let Some((source, translated)) = parts.next() {
        out.push_str(translated);

        let Some(&(_, next)) = parts.peek() else {
            break;
        };
        if translated.ends_with(char::is_whitespace) {
            continue;
        }

        let trailing = &source[source.trim_end().len()..];
        if !trailing.is_empty() {
            out.push_str(trailing);
        } else if !next.starts_with(char::is_whitespace)
            && !source.is_empty()
            && !translated.is_empty()
            && source != translated
        {
            out.push(' ');
        }
    }

    out
}
