use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static TAB_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]*\t[^\S\n]*").expect("valid tab pattern"));
static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n\t]+").expect("valid whitespace pattern"));
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line pattern"));

/// Normalizes flat extracted text before language identification.
///
/// Applies NFKC and trims every line. Inside a line, a run of horizontal
/// whitespace containing a tab becomes one tab and any other run becomes one
/// space. At most one blank line is kept between paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.replace("\r\n", "\n").nfkc().collect();
    let tabs = TAB_RUN.replace_all(&normalized, "\t");
    let collapsed = HORIZONTAL_SPACE.replace_all(&tabs, " ");

    let trimmed_lines: Vec<&str> = collapsed.lines().map(str::trim).collect();
    let joined = trimmed_lines.join("\n");

    BLANK_LINES.replace_all(&joined, "\n\n").trim().to_string()
}
