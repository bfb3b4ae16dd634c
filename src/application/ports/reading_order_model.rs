use async_trait::async_trait;

use crate::domain::NormalizedToken;

use super::InferenceError;

/// Predicts the reading order of one window of tokens.
///
/// The returned vector lists local indices into `tokens` in reading order.
/// Implementations are not required to validate it; the reconstructor does.
#[async_trait]
pub trait ReadingOrderModel: Send + Sync {
    async fn predict_order(&self, tokens: &[NormalizedToken]) -> Result<Vec<usize>, InferenceError>;

    fn name(&self) -> &'static str;
}
