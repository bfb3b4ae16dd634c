use std::fmt;

use super::document::{DocumentFormat, DocumentId};
use super::language::FallbackReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Extraction,
    Reordering,
    Identification,
    Translation,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extraction => "extraction",
            Stage::Reordering => "reordering",
            Stage::Identification => "identification",
            Stage::Translation => "translation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage that failed but was recovered with a default.
#[derive(Debug, Clone, PartialEq)]
pub enum Degradation {
    ReadingOrderFallback {
        page: usize,
        window: usize,
        reason: String,
    },
    LanguageFallback {
        code: String,
        reason: FallbackReason,
    },
    TranslationIncomplete {
        failed_segments: Vec<usize>,
        total_segments: usize,
        reason: String,
    },
}

impl Degradation {
    pub fn stage(&self) -> Stage {
        match self {
            Self::ReadingOrderFallback { .. } => Stage::Reordering,
            Self::LanguageFallback { .. } => Stage::Identification,
            Self::TranslationIncomplete { .. } => Stage::Translation,
        }
    }
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadingOrderFallback {
                page,
                window,
                reason,
            } => write!(
                f,
                "reordering failed on page {page} window {window} ({reason}); kept extraction order"
            ),
            Self::LanguageFallback { code, reason } => {
                write!(f, "language identification fell back to '{code}': {reason}")
            }
            Self::TranslationIncomplete {
                failed_segments,
                total_segments,
                reason,
            } => write!(
                f,
                "{} of {total_segments} segments left untranslated ({reason})",
                failed_segments.len()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub document_id: DocumentId,
    pub format: DocumentFormat,
    pub pages: usize,
    pub tokens: usize,
    pub source_language: String,
    pub target_language: String,
    pub translated: bool,
    pub segments: usize,
    pub degradations: Vec<Degradation>,
}

impl PipelineReport {
    pub fn new(document_id: DocumentId, format: DocumentFormat, target_language: &str) -> Self {
        Self {
            document_id,
            format,
            pages: 0,
            tokens: 0,
            source_language: String::new(),
            target_language: target_language.to_string(),
            translated: false,
            segments: 0,
            degradations: Vec::new(),
        }
    }

    /// False when any translated segment could not be produced.
    pub fn is_complete(&self) -> bool {
        !self
            .degradations
            .iter()
            .any(|d| matches!(d, Degradation::TranslationIncomplete { .. }))
    }

    pub fn degradations_for(&self, stage: Stage) -> impl Iterator<Item = &Degradation> {
        self.degradations.iter().filter(move |d| d.stage() == stage)
    }
}
