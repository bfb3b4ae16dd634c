use async_trait::async_trait;

use crate::application::ports::{InferenceError, ReadingOrderModel};
use crate::domain::NormalizedToken;

/// Keeps extraction order.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityReadingOrder;

#[async_trait]
impl ReadingOrderModel for IdentityReadingOrder {
    async fn predict_order(&self, tokens: &[NormalizedToken]) -> Result<Vec<usize>, InferenceError> {
        Ok((0..tokens.len()).collect())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
