use async_trait::async_trait;

use crate::application::ports::{InferenceError, LanguageClassifier};
use crate::domain::LanguagePrediction;

/// Always answers with the same prediction.
pub struct FixedClassifier {
    prediction: LanguagePrediction,
}

impl FixedClassifier {
    pub fn new(iso639_3: impl Into<String>, confidence: f64) -> Self {
        Self {
            prediction: LanguagePrediction::new(iso639_3, confidence),
        }
    }
}

#[async_trait]
impl LanguageClassifier for FixedClassifier {
    async fn classify(&self, _text: &str) -> Result<LanguagePrediction, InferenceError> {
        Ok(self.prediction.clone())
    }
}
