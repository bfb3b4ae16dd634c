use std::sync::Arc;

use crate::application::ports::LanguageClassifier;
use crate::domain::{FallbackReason, LanguageDecision, iso639_3_to_iso639_1};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.4;
pub const DEFAULT_FALLBACK_CODE: &str = "cs";
pub const DEFAULT_MIN_TEXT_CHARS: usize = 8;
pub const DEFAULT_MAX_SAMPLE_CHARS: usize = 2000;

#[derive(Debug, Clone)]
pub struct LanguagePolicy {
    pub confidence_threshold: f64,
    pub fallback_code: String,
    pub min_text_chars: usize,
    pub max_sample_chars: usize,
}

impl Default for LanguagePolicy {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            fallback_code: DEFAULT_FALLBACK_CODE.to_string(),
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            max_sample_chars: DEFAULT_MAX_SAMPLE_CHARS,
        }
    }
}

/// Flattens newlines, lowercases and truncates to `max_chars` characters.
pub fn prepare_sample(text: &str, max_chars: usize) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .flat_map(char::to_lowercase)
        .take(max_chars)
        .collect()
}

pub struct LanguageIdentifier {
    classifier: Arc<dyn LanguageClassifier>,
    policy: LanguagePolicy,
}

impl LanguageIdentifier {
    pub fn new(classifier: Arc<dyn LanguageClassifier>, policy: LanguagePolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn policy(&self) -> &LanguagePolicy {
        &self.policy
    }

    /// Picks the source language of `text`. Never fails; every problem
    /// resolves to the fallback code with a reason attached.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn identify(&self, text: &str) -> LanguageDecision {
        let fallback = self.policy.fallback_code.as_str();

        let visible = text.chars().filter(|c| !c.is_whitespace()).count();
        if visible == 0 {
            return LanguageDecision::fallback(fallback, None, FallbackReason::EmptyText);
        }
        if visible < self.policy.min_text_chars {
            return LanguageDecision::fallback(
                fallback,
                None,
                FallbackReason::TextTooShort {
                    chars: visible,
                    min: self.policy.min_text_chars,
                },
            );
        }

        let sample = prepare_sample(text, self.policy.max_sample_chars);
        let prediction = match self.classifier.classify(&sample).await {
            Ok(prediction) => prediction,
            Err(e) => {
                tracing::warn!(error = %e, "Language classifier failed");
                return LanguageDecision::fallback(
                    fallback,
                    None,
                    FallbackReason::ClassifierUnavailable(e.to_string()),
                );
            }
        };

        tracing::debug!(
            code = %prediction.iso639_3,
            confidence = prediction.confidence,
            "Language prediction"
        );

        if prediction.confidence < self.policy.confidence_threshold {
            let reason = FallbackReason::LowConfidence {
                confidence: prediction.confidence,
                threshold: self.policy.confidence_threshold,
            };
            return LanguageDecision::fallback(fallback, Some(prediction), reason);
        }

        match iso639_3_to_iso639_1(&prediction.iso639_3) {
            Some(code) => LanguageDecision::detected(code, prediction),
            None => {
                let reason = FallbackReason::UnmappedCode(prediction.iso639_3.clone());
                LanguageDecision::fallback(fallback, Some(prediction), reason)
            }
        }
    }
}
