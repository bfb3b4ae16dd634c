use std::io::{Cursor, Read};
use std::time::Duration;

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentFormat, ExtractedContent};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, parse_blocking};
use super::text_sanitizer::sanitize_extracted_text;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph text from the main part of a DOCX package.
pub struct DocxAdapter {
    timeout: Duration,
}

impl DocxAdapter {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn corrupt(reason: impl ToString) -> ExtractionError {
    ExtractionError::corrupt(DocumentFormat::Docx, reason)
}

pub fn parse_docx(data: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(data)).map_err(corrupt)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| corrupt(format!("{DOCUMENT_PART} missing: {e}")))?
        .read_to_string(&mut xml)
        .map_err(corrupt)?;

    paragraphs_from_xml(&xml).map(|paragraphs| paragraphs.join("\n"))
}

/// Collects `w:p` paragraphs in document order: `w:t` runs verbatim,
/// `w:tab` as a tab and `w:br`/`w:cr` as a line break.
///
/// Paragraphs nested inside text boxes get their own slot right after the
/// enclosing paragraph's slot. Only the `mc:Choice` branch of
/// `mc:AlternateContent` is read; the `mc:Fallback` copy is skipped.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut in_text_run = false;
    let mut in_properties = false;
    let mut fallback_depth = 0usize;
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf);
        if fallback_depth > 0 {
            match event {
                Ok(Event::Start(e)) if e.name().as_ref() == b"mc:Fallback" => fallback_depth += 1,
                Ok(Event::End(e)) if e.name().as_ref() == b"mc:Fallback" => fallback_depth -= 1,
                Ok(Event::Eof) => break,
                Err(e) => return Err(corrupt(format!("error parsing {DOCUMENT_PART}: {e}"))),
                _ => {}
            }
            buf.clear();
            continue;
        }

        let current = open.last().copied();
        match event {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:pPr" => in_properties = true,
                b"w:p" => {
                    open.push(paragraphs.len());
                    paragraphs.push(String::new());
                }
                b"mc:Fallback" => fallback_depth = 1,
                _ => {}
            },
            Ok(Event::Empty(e)) => match (e.name().as_ref(), current) {
                (b"w:tab", Some(slot)) if !in_properties => paragraphs[slot].push('\t'),
                (b"w:br" | b"w:cr", Some(slot)) => paragraphs[slot].push('\n'),
                (b"w:p", _) => paragraphs.push(String::new()),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                if let Some(slot) = current {
                    let text = e.unescape().map_err(corrupt)?;
                    paragraphs[slot].push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:pPr" => in_properties = false,
                b"w:p" => {
                    open.pop();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(corrupt(format!("error parsing {DOCUMENT_PART}: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[async_trait]
impl DocumentExtractor for DocxAdapter {
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
        if document.format != DocumentFormat::Docx {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let data = data.to_vec();
        let text = parse_blocking(DocumentFormat::Docx, self.timeout, move || {
            parse_docx(&data)
        })
        .await?;

        Ok(ExtractedContent::Flat(sanitize_extracted_text(&text)))
    }
}
