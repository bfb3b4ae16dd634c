use async_trait::async_trait;
use scraper::{ElementRef, Html, Node};

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentFormat, ExtractedContent};

use super::text_sanitizer::sanitize_extracted_text;

const SKIPPED_ELEMENTS: [&str; 5] = ["script", "style", "head", "noscript", "template"];

pub struct HtmlAdapter;

/// Visible text nodes in document order, each trimmed, joined by one space.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();
    collect_text(document.root_element(), &mut parts);
    parts.join(" ")
}

fn collect_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    if SKIPPED_ELEMENTS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, parts);
                }
            }
            _ => {}
        }
    }
}

#[async_trait]
impl DocumentExtractor for HtmlAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractionError> {
        if document.format != DocumentFormat::Html {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let html = String::from_utf8_lossy(data);
        Ok(ExtractedContent::Flat(sanitize_extracted_text(
            &html_to_text(&html),
        )))
    }
}
