use std::ops::Range;

/// Borrowed span of the text submitted to the translation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSegment<'a> {
    pub index: usize,
    /// Byte range into the source text.
    pub range: Range<usize>,
    pub text: &'a str,
}

impl<'a> TranslationSegment<'a> {
    pub fn new(index: usize, source: &'a str, range: Range<usize>) -> Self {
        let text = &source[range.clone()];
        Self { index, range, text }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
