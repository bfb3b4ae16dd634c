use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::application::ports::{TranslationError, Translator};
use crate::domain::TranslationSegment;

use super::translation_chunker::{DEFAULT_MAX_SEGMENT_CHARS, reassemble, split_into_segments};

pub const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
pub const MAX_BACKOFF: Duration = Duration::from_secs(8);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: INITIAL_BACKOFF,
            max_backoff: MAX_BACKOFF,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFailure {
    pub index: usize,
    pub attempts: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    pub text: String,
    pub segments: usize,
    /// False when source and target matched or there was nothing to send.
    pub translated: bool,
    pub failures: Vec<SegmentFailure>,
}

impl TranslationOutcome {
    fn untouched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            segments: 0,
            translated: false,
            failures: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Sends text to the translator in bounded segments and stitches the
/// results back together.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    max_segment_chars: usize,
    retry: RetryPolicy,
    max_concurrent_requests: usize,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            max_segment_chars: DEFAULT_MAX_SEGMENT_CHARS,
            retry: RetryPolicy::default(),
            max_concurrent_requests: 1,
        }
    }

    pub fn with_max_segment_chars(mut self, max_segment_chars: usize) -> Self {
        self.max_segment_chars = max_segment_chars.max(1);
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit.max(1);
        self
    }

    /// Translates `text`. Segments that still fail after retrying keep their
    /// source text and are listed in `failures`.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> TranslationOutcome {
        if source.eq_ignore_ascii_case(target) {
            tracing::info!(source, "Source and target languages match, skipping translation");
            return TranslationOutcome::untouched(text);
        }
        if text.trim().is_empty() {
            return TranslationOutcome::untouched(text);
        }

        let segments = split_into_segments(text, self.max_segment_chars);
        tracing::info!(segments = segments.len(), "Translating segments");

        let results: Vec<Result<String, SegmentFailure>> = stream::iter(segments.iter())
            .map(|segment| self.translate_segment(segment, source, target))
            .buffered(self.max_concurrent_requests)
            .collect()
            .await;

        let mut failures = Vec::new();
        let mut outputs = Vec::with_capacity(results.len());
        for (segment, result) in segments.iter().zip(results) {
            match result {
                Ok(translated) => outputs.push(translated),
                Err(failure) => {
                    failures.push(failure);
                    outputs.push(segment.text.to_string());
                }
            }
        }

        let text = reassemble(
            segments
                .iter()
                .zip(outputs.iter())
                .map(|(segment, output)| (segment.text, output.as_str())),
        );

        TranslationOutcome {
            text,
            segments: segments.len(),
            translated: true,
            failures,
        }
    }

    #[tracing::instrument(
        skip(self, segment),
        fields(segment = segment.index, chars = segment.char_count())
    )]
    async fn translate_segment(
        &self,
        segment: &TranslationSegment<'_>,
        source: &str,
        target: &str,
    ) -> Result<String, SegmentFailure> {
        if segment.text.trim().is_empty() {
            return Ok(segment.text.to_string());
        }

        let max_attempts = self.retry.max_attempts.max(1);
        let mut backoff = self.retry.initial_backoff;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.translator.translate(segment.text, source, target).await {
                Ok(translated) => return Ok(translated),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        backoff_ms = backoff.as_millis() as u64,
                        "Retrying segment translation"
                    );
                    tokio::time::sleep(backoff).await;
                    backoff = (backoff * 2).min(self.retry.max_backoff);
                }
                Err(e) => {
                    tracing::error!(attempt, error = %e, "Segment translation failed");
                    return Err(failure(segment.index, attempt, &e));
                }
            }
        }
    }
}

fn failure(index: usize, attempts: u32, error: &TranslationError) -> SegmentFailure {
    SegmentFailure {
        index,
        attempts,
        reason: error.to_string(),
    }
}
