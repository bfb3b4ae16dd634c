use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{
    Degradation, Document, DocumentFormat, ExtractedContent, PipelineReport,
};

use super::language_identifier::LanguageIdentifier;
use super::reading_order_service::ReadingOrderReconstructor;
use super::translation_service::TranslationService;

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub text: String,
    pub report: PipelineReport,
}

/// Runs one document through extraction, reordering, language
/// identification and translation.
pub struct TranslationPipeline {
    extractor: Arc<dyn DocumentExtractor>,
    reconstructor: ReadingOrderReconstructor,
    identifier: LanguageIdentifier,
    translation: TranslationService,
    timeout: Option<Duration>,
}

impl TranslationPipeline {
    pub fn new(
        extractor: Arc<dyn DocumentExtractor>,
        reconstructor: ReadingOrderReconstructor,
        identifier: LanguageIdentifier,
        translation: TranslationService,
    ) -> Self {
        Self {
            extractor,
            reconstructor,
            identifier,
            translation,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn translate_document(
        &self,
        data: &[u8],
        filename: String,
        format: DocumentFormat,
        target_language: &str,
    ) -> Result<PipelineOutput, PipelineError> {
        let document = Document::new(filename, format, data.len() as u64);

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.run(data, &document, target_language))
                .await
                .map_err(|_| PipelineError::TimedOut(limit))?,
            None => self.run(data, &document, target_language).await,
        }
    }

    #[tracing::instrument(
        skip(self, data, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = %document.format,
        )
    )]
    async fn run(
        &self,
        data: &[u8],
        document: &Document,
        target_language: &str,
    ) -> Result<PipelineOutput, PipelineError> {
        let mut report = PipelineReport::new(document.id, document.format, target_language);

        let content = self.extractor.extract(data, document).await?;
        report.pages = content.page_count();
        report.tokens = content.token_count();
        tracing::info!(pages = report.pages, tokens = report.tokens, "Extraction complete");

        let text = match content {
            ExtractedContent::Paged(pages) => {
                let reconstruction = self.reconstructor.reconstruct_pages(&pages).await;
                report
                    .degradations
                    .extend(reconstruction.failures().cloned().map(Degradation::from));
                reconstruction.text()
            }
            ExtractedContent::Flat(text) => text,
        };

        let decision = self.identifier.identify(&text).await;
        if let Some(reason) = decision.fallback.clone() {
            tracing::warn!(code = %decision.code, %reason, "Using fallback source language");
            report.degradations.push(Degradation::LanguageFallback {
                code: decision.code.clone(),
                reason,
            });
        }
        report.source_language = decision.code.clone();

        let outcome = self
            .translation
            .translate(&text, &decision.code, target_language)
            .await;
        report.translated = outcome.translated;
        report.segments = outcome.segments;

        if let Some(first) = outcome.failures.first() {
            report.degradations.push(Degradation::TranslationIncomplete {
                failed_segments: outcome.failures.iter().map(|f| f.index).collect(),
                total_segments: outcome.segments,
                reason: first.reason.clone(),
            });
        }

        tracing::info!(
            source = %report.source_language,
            target = target_language,
            complete = report.is_complete(),
            degradations = report.degradations.len(),
            "Document processed"
        );

        Ok(PipelineOutput {
            text: outcome.text,
            report,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("pipeline timed out after {0:?}")]
    TimedOut(Duration),
}
