use async_trait::async_trait;

use crate::domain::LanguagePrediction;

use super::InferenceError;

#[async_trait]
pub trait LanguageClassifier: Send + Sync {
    /// Returns an ISO 639-3 code and a confidence in `[0, 1]`.
    async fn classify(&self, text: &str) -> Result<LanguagePrediction, InferenceError>;
}
