use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DocumentExtractor;
use crate::domain::DocumentFormat;
use crate::presentation::config::ExtractionSettings;

use super::alto_adapter::AltoAdapter;
use super::composite_extractor::CompositeExtractor;
use super::csv_adapter::CsvAdapter;
use super::docx_adapter::DocxAdapter;
use super::html_adapter::HtmlAdapter;
use super::json_adapter::JsonAdapter;
use super::key_pattern::KeyPattern;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("text_key_pattern must not be empty")]
    EmptyKeyPattern,
    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Builds an extractor covering every supported format.
    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<Arc<dyn DocumentExtractor>, ExtractorFactoryError> {
        if settings.text_key_pattern.trim().is_empty() {
            return Err(ExtractorFactoryError::EmptyKeyPattern);
        }
        if settings.timeout_secs == 0 {
            return Err(ExtractorFactoryError::ZeroTimeout);
        }

        let timeout = Duration::from_secs(settings.timeout_secs);
        let pattern = KeyPattern::new(&settings.text_key_pattern);

        let adapters: Vec<(DocumentFormat, Arc<dyn DocumentExtractor>)> = vec![
            (
                DocumentFormat::Pdf,
                Arc::new(PdfAdapter::new().with_timeout(timeout)),
            ),
            (
                DocumentFormat::AltoXml,
                Arc::new(AltoAdapter::new().with_timeout(timeout)),
            ),
            (
                DocumentFormat::Docx,
                Arc::new(DocxAdapter::new().with_timeout(timeout)),
            ),
            (DocumentFormat::Html, Arc::new(HtmlAdapter)),
            (DocumentFormat::Csv, Arc::new(CsvAdapter::new(pattern.clone()))),
            (DocumentFormat::Json, Arc::new(JsonAdapter::new(pattern))),
            (DocumentFormat::Txt, Arc::new(PlainTextAdapter)),
        ];

        tracing::info!(
            key_pattern = %settings.text_key_pattern,
            max_file_size_mb = settings.max_file_size_mb,
            "Document extractors ready"
        );

        Ok(Arc::new(
            CompositeExtractor::new(adapters).with_max_file_size_mb(settings.max_file_size_mb),
        ))
    }
}
