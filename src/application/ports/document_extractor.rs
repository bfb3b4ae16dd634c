use async_trait::async_trait;

use crate::domain::{Document, DocumentFormat, ExtractedContent};

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("{format} file could not be read: {reason}")]
    Corrupt {
        format: DocumentFormat,
        reason: String,
    },
    #[error("{format} extraction timed out")]
    TimedOut { format: DocumentFormat },
    #[error("{format} file exceeds {limit_mb} MB")]
    TooLarge {
        format: DocumentFormat,
        limit_mb: usize,
    },
}

impl ExtractionError {
    pub fn corrupt(format: DocumentFormat, reason: impl ToString) -> Self {
        Self::Corrupt {
            format,
            reason: reason.to_string(),
        }
    }
}
