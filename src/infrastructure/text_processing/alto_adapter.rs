use std::time::Duration;

use async_trait::async_trait;
use roxmltree::Node;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{BoundingBox, Document, DocumentFormat, ExtractedContent, Page, Token};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, parse_blocking};

/// Positional extraction from ALTO XML (namespaced or not).
pub struct AltoAdapter {
    timeout: Duration,
}

impl AltoAdapter {
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

impl Default for AltoAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses every `<Page>` of an ALTO document in document order.
pub fn parse_alto(xml: &str) -> Result<Vec<Page>, ExtractionError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(xml, options)
        .map_err(|e| ExtractionError::corrupt(DocumentFormat::AltoXml, e))?;

    let root = doc.root_element();
    if root.tag_name().name() != "alto" {
        return Err(ExtractionError::corrupt(
            DocumentFormat::AltoXml,
            format!("unexpected root element <{}>", root.tag_name().name()),
        ));
    }

    let pages = root
        .descendants()
        .filter(|n| is_element(n, "Page"))
        .enumerate()
        .map(|(index, page)| parse_page(index, page))
        .collect();

    Ok(pages)
}

fn parse_page(index: usize, page: Node<'_, '_>) -> Page {
    let width = number_attr(page, "WIDTH").unwrap_or(0.0);
    let height = number_attr(page, "HEIGHT").unwrap_or(0.0);

    let tokens = page
        .descendants()
        .filter(|n| is_element(n, "TextLine"))
        .flat_map(line_tokens)
        .collect();

    Page::new(index, width, height).with_tokens(tokens)
}

fn line_tokens(line: Node<'_, '_>) -> Vec<Token> {
    let children: Vec<Node<'_, '_>> = line
        .children()
        .filter(|n| n.is_element() && !is_element(n, "SP"))
        .collect();

    children
        .iter()
        .enumerate()
        .filter(|(_, n)| is_element(n, "String"))
        .filter_map(|(i, node)| {
            let token = string_token(*node)?;
            let before_hyp = children.get(i + 1).is_some_and(|n| is_element(n, "HYP"));
            let hyp_part = node.attribute("SUBS_TYPE") == Some("HypPart1");
            Some(token.with_hyphenation(before_hyp || hyp_part))
        })
        .collect()
}

fn string_token(node: Node<'_, '_>) -> Option<Token> {
    let content = node.attribute("CONTENT")?;
    if content.trim().is_empty() {
        return None;
    }

    let geometry = (
        number_attr(node, "HPOS"),
        number_attr(node, "VPOS"),
        number_attr(node, "WIDTH"),
        number_attr(node, "HEIGHT"),
    );
    match geometry {
        (Some(x), Some(y), Some(w), Some(h)) => Some(Token::positioned(
            content,
            BoundingBox::from_origin_size(x, y, w, h),
        )),
        _ => {
            tracing::debug!(content, "Skipping ALTO String with unusable geometry");
            None
        }
    }
}

fn is_element(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn number_attr(node: Node<'_, '_>, name: &str) -> Option<f64> {
    node.attribute(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[async_trait]
impl DocumentExtractor for AltoAdapter {
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
        if document.format != DocumentFormat::AltoXml {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let xml = String::from_utf8(data.to_vec())
            .map_err(|e| ExtractionError::corrupt(DocumentFormat::AltoXml, e))?;

        let pages = parse_blocking(DocumentFormat::AltoXml, self.timeout, move || {
            parse_alto(&xml)
        })
        .await?;

        let token_count: usize = pages.iter().map(|p| p.tokens.len()).sum();
        tracing::info!(page_count = pages.len(), token_count, "ALTO extraction complete");

        Ok(ExtractedContent::Paged(pages))
    }
}
