use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::application::services::is_line_end_hyphen;
use crate::domain::{BoundingBox, Document, DocumentFormat, ExtractedContent, Page, Token};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, parse_blocking};

/// Fraction of a line's height two spans may differ vertically and still
/// count as the same line.
const SAME_LINE_TOLERANCE: f64 = 0.5;

/// Word-level positional extraction backed by `pdf_oxide`.
pub struct PdfAdapter {
    timeout: Duration,
}

/// A text span in top-left-origin page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanGeometry {
    pub text: String,
    pub bbox: BoundingBox,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn extract_pages(path: &Path) -> Result<Vec<Page>, ExtractionError> {
        let corrupt = |e: pdf_oxide::Error| ExtractionError::corrupt(DocumentFormat::Pdf, e);

        let mut doc = PdfDocument::open(path).map_err(corrupt)?;
        let page_count = doc.page_count().map_err(corrupt)?;
        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let media_box = doc.get_page_info(page_index).map_err(corrupt)?.media_box;
            let width = f64::from(media_box.width);
            let height = f64::from(media_box.height);

            let spans = match doc.extract_spans(page_index) {
                Ok(spans) => spans,
                Err(e) => {
                    tracing::warn!(page = page_index, error = %e, "Skipping unreadable PDF page");
                    Vec::new()
                }
            };

            let geometry: Vec<SpanGeometry> = spans
                .into_iter()
                .map(|span| SpanGeometry {
                    bbox: flip_to_top_left(
                        f64::from(span.bbox.x - media_box.x),
                        f64::from(span.bbox.y - media_box.y),
                        f64::from(span.bbox.width),
                        f64::from(span.bbox.height),
                        height,
                    ),
                    text: span.text,
                })
                .collect();

            let tokens = spans_to_words(&geometry);
            tracing::debug!(page = page_index, tokens = tokens.len(), "PDF page extracted");
            pages.push(Page::new(page_index, width, height).with_tokens(tokens));
        }

        Ok(pages)
    }
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a bottom-left-origin rectangle into top-left-origin coordinates.
pub fn flip_to_top_left(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    page_height: f64,
) -> BoundingBox {
    let top = page_height - (y + height);
    BoundingBox::from_origin_size(x, top, width, height)
}

/// Splits spans into whitespace-delimited words, giving each word the slice
/// of the span box proportional to its character offsets.
///
/// The last word of a span that closes a line is flagged as a hyphenation
/// continuation when it ends in a hyphen after a letter.
pub fn spans_to_words(spans: &[SpanGeometry]) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (i, span) in spans.iter().enumerate() {
        let total_chars = span.text.chars().count();
        if total_chars == 0 {
            continue;
        }
        let char_width = span.bbox.width() / total_chars as f64;
        let ends_line = spans
            .get(i + 1)
            .is_none_or(|next| !same_line(&span.bbox, &next.bbox));

        let words = split_words(&span.text);
        let last = words.len().saturating_sub(1);

        for (n, (start, word)) in words.into_iter().enumerate() {
            let len = word.chars().count();
            let x0 = span.bbox.x0 + char_width * start as f64;
            let bbox = BoundingBox::new(x0, span.bbox.y0, x0 + char_width * len as f64, span.bbox.y1);
            let hyphenated = n == last && ends_line && is_line_end_hyphen(word);
            tokens.push(Token::positioned(word, bbox).with_hyphenation(hyphenated));
        }
    }

    tokens
}

/// Words with their starting character offset.
fn split_words(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (char_pos, (byte_pos, ch)) in text.char_indices().enumerate() {
        match (ch.is_whitespace(), start) {
            (true, Some((char_start, byte_start))) => {
                words.push((char_start, &text[byte_start..byte_pos]));
                start = None;
            }
            (false, None) => start = Some((char_pos, byte_pos)),
            _ => {}
        }
    }

    if let Some((char_start, byte_start)) = start {
        words.push((char_start, &text[byte_start..]));
    }

    words
}

fn same_line(a: &BoundingBox, b: &BoundingBox) -> bool {
    let line_height = a.height().max(b.height()).max(f64::EPSILON);
    let a_mid = (a.y0 + a.y1) / 2.0;
    let b_mid = (b.y0 + b.y1) / 2.0;
    (a_mid - b_mid).abs() <= line_height * SAME_LINE_TOLERANCE && b.x0 >= a.x0
}

#[async_trait]
impl DocumentExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractionError> {
        if document.format != DocumentFormat::Pdf {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            ExtractionError::corrupt(DocumentFormat::Pdf, format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            ExtractionError::corrupt(DocumentFormat::Pdf, format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();
        let pages = parse_blocking(DocumentFormat::Pdf, self.timeout, move || {
            Self::extract_pages(&temp_path)
        })
        .await?;

        let token_count: usize = pages.iter().map(|p| p.tokens.len()).sum();
        tracing::info!(page_count = pages.len(), token_count, "PDF extraction complete");

        Ok(ExtractedContent::Paged(pages))
    }
}
