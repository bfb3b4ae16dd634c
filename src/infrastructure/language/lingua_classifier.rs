use std::sync::Arc;

use async_trait::async_trait;
use lingua::{LanguageDetector, LanguageDetectorBuilder};

use crate::application::ports::{InferenceError, LanguageClassifier};
use crate::domain::LanguagePrediction;

/// Offline classifier backed by `lingua` statistical models.
pub struct LinguaClassifier {
    detector: Arc<LanguageDetector>,
}

impl LinguaClassifier {
    /// Builds a detector over every language `lingua` knows. Models load
    /// lazily on first use.
    pub fn new() -> Self {
        Self {
            detector: Arc::new(LanguageDetectorBuilder::from_all_languages().build()),
        }
    }

    fn classify_blocking(detector: &LanguageDetector, text: &str) -> Result<LanguagePrediction, InferenceError> {
        let language = detector
            .detect_language_of(text)
            .ok_or_else(|| InferenceError::InvalidResponse("no language detected".to_string()))?;
        let confidence = detector.compute_language_confidence(text, language);

        Ok(LanguagePrediction::new(
            language.iso_code_639_3().to_string(),
            confidence,
        ))
    }
}

impl Default for LinguaClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageClassifier for LinguaClassifier {
    #[tracing::instrument(skip(self, text), fields(sample_len = text.len()))]
    async fn classify(&self, text: &str) -> Result<LanguagePrediction, InferenceError> {
        let detector = Arc::clone(&self.detector);
        let text = text.to_string();

        tokio::task::spawn_blocking(move || Self::classify_blocking(&detector, &text))
            .await
            .map_err(|e| InferenceError::Unavailable(format!("task join error: {e}")))?
    }
}
