use crate::domain::PermutationError;

/// Failure of an external model call. Callers degrade to a default rather
/// than abort.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference service unavailable: {0}")]
    Unavailable(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid permutation: {0}")]
    InvalidPermutation(#[from] PermutationError),
    #[error("inference timed out")]
    TimedOut,
}
