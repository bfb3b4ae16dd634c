use std::time::Duration;

use crate::application::ports::ExtractionError;
use crate::domain::DocumentFormat;

pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a CPU-bound parser on the blocking pool, bounded by `timeout`.
pub(crate) async fn parse_blocking<T, F>(
    format: DocumentFormat,
    timeout: Duration,
    parse: F,
) -> Result<T, ExtractionError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ExtractionError> + Send + 'static,
{
    tokio::time::timeout(timeout, tokio::task::spawn_blocking(parse))
        .await
        .map_err(|_| ExtractionError::TimedOut { format })?
        .map_err(|e| ExtractionError::corrupt(format, format!("task join error: {e}")))?
}
