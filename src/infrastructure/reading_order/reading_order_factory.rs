use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::ReadingOrderModel;
use crate::presentation::config::{ReadingOrderProvider, ReadingOrderSettings};

use super::heuristic_reading_order::HeuristicReadingOrder;
use super::http_reading_order::HttpReadingOrder;
use super::identity_reading_order::IdentityReadingOrder;

#[derive(Debug, thiserror::Error)]
pub enum ReadingOrderFactoryError {
    #[error("endpoint is required for the http reading-order provider")]
    MissingEndpoint,
    #[error("reading-order client initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct ReadingOrderFactory;

impl ReadingOrderFactory {
    pub fn create(
        settings: &ReadingOrderSettings,
    ) -> Result<Arc<dyn ReadingOrderModel>, ReadingOrderFactoryError> {
        match settings.provider {
            ReadingOrderProvider::Heuristic => {
                tracing::info!("Using heuristic reading order");
                Ok(Arc::new(HeuristicReadingOrder::new()))
            }
            ReadingOrderProvider::Identity => {
                tracing::info!("Using extraction order as reading order");
                Ok(Arc::new(IdentityReadingOrder))
            }
            ReadingOrderProvider::Http => {
                let endpoint = settings
                    .endpoint
                    .clone()
                    .filter(|e| !e.is_empty())
                    .ok_or(ReadingOrderFactoryError::MissingEndpoint)?;
                tracing::info!(endpoint = %endpoint, "Using HTTP reading-order model");
                let model =
                    HttpReadingOrder::new(endpoint, Duration::from_secs(settings.timeout_secs))
                        .map_err(|e| ReadingOrderFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(model))
            }
        }
    }
}
