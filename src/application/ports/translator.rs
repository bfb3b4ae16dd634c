use async_trait::async_trait;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("network error: {0}")]
    Network(String),
    #[error("rate limited")]
    RateLimited,
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },
    #[error("request rejected {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("no translation model for {0}")]
    UnsupportedModel(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl TranslationError {
    /// Network failures, timeouts, 429 and 5xx are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::RateLimited | Self::Server { .. }
        )
    }

    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            429 => Self::RateLimited,
            500..=599 => Self::Server { status, body },
            _ => Self::Rejected { status, body },
        }
    }
}
