use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, ExtractedContent};

/// Returns a fixed extraction result regardless of input.
pub struct MockExtractor {
    content: ExtractedContent,
}

impl MockExtractor {
    pub fn new(content: ExtractedContent) -> Self {
        Self { content }
    }
}

#[async_trait::async_trait]
impl DocumentExtractor for MockExtractor {
    async fn extract(
        &self,
        _data: &[u8],
        _doc: &Document,
    ) -> Result<ExtractedContent, ExtractionError> {
        Ok(self.content.clone())
    }
}
