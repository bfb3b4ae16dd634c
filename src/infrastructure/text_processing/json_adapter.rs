use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentFormat, ExtractedContent};

use super::key_pattern::KeyPattern;

/// String values stored under keys matching the key pattern.
pub struct JsonAdapter {
    pattern: KeyPattern,
}

impl JsonAdapter {
    pub fn new(pattern: KeyPattern) -> Self {
        Self { pattern }
    }
}

impl Default for JsonAdapter {
    fn default() -> Self {
        Self::new(KeyPattern::default())
    }
}

/// Walks `value` depth-first in insertion order, collecting strings whose
/// nearest enclosing object key matches. Arrays inherit their key.
pub fn json_to_text(data: &[u8], pattern: &KeyPattern) -> Result<String, ExtractionError> {
    let value: Value = serde_json::from_slice(data)
        .map_err(|e| ExtractionError::corrupt(DocumentFormat::Json, e))?;

    let mut out = Vec::new();
    collect(&value, false, pattern, &mut out);
    Ok(out.join("\n"))
}

fn collect<'a>(value: &'a Value, under_match: bool, pattern: &KeyPattern, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) if under_match => {
            if !s.trim().is_empty() {
                out.push(s.as_str());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, under_match, pattern, out);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                collect(child, pattern.matches(key), pattern, out);
            }
        }
        _ => {}
    }
}

#[async_trait]
impl DocumentExtractor for JsonAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractionError> {
        if document.format != DocumentFormat::Json {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        json_to_text(data, &self.pattern).map(ExtractedContent::Flat)
    }
}
