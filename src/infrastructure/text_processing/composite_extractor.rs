use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentFormat, ExtractedContent};

/// Dispatches to the adapter registered for the document's format.
pub struct CompositeExtractor {
    adapters: HashMap<DocumentFormat, Arc<dyn DocumentExtractor>>,
    max_file_size_bytes: Option<u64>,
}

impl CompositeExtractor {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn DocumentExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
            max_file_size_bytes: None,
        }
    }

    pub fn with_max_file_size_mb(mut self, limit_mb: usize) -> Self {
        self.max_file_size_bytes = Some(limit_mb as u64 * 1024 * 1024);
        self
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.adapters.contains_key(&format)
    }
}

#[async_trait]
impl DocumentExtractor for CompositeExtractor {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractionError> {
        let adapter = self
            .adapters
            .get(&document.format)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(document.format.to_string()))?;

        if let Some(limit) = self.max_file_size_bytes.filter(|l| document.size_bytes > *l) {
            return Err(ExtractionError::TooLarge {
                format: document.format,
                limit_mb: (limit / (1024 * 1024)) as usize,
            });
        }

        adapter.extract(data, document).await
    }
}
