use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::Translator;
use crate::presentation::config::{TranslationProvider, TranslationSettings};

use super::identity_translator::IdentityTranslator;
use super::lindat_translator::LindatTranslator;

#[derive(Debug, thiserror::Error)]
pub enum TranslatorFactoryError {
    #[error("base_url is required for the lindat translation provider")]
    MissingBaseUrl,
    #[error("translator initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create(
        settings: &TranslationSettings,
    ) -> Result<Arc<dyn Translator>, TranslatorFactoryError> {
        match settings.provider {
            TranslationProvider::Lindat => {
                if settings.base_url.trim().is_empty() {
                    return Err(TranslatorFactoryError::MissingBaseUrl);
                }
                tracing::info!(base_url = %settings.base_url, "Using LINDAT translator");
                let translator = LindatTranslator::new(
                    &settings.base_url,
                    Duration::from_secs(settings.timeout_secs),
                )
                .map_err(|e| TranslatorFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(translator))
            }
            TranslationProvider::Identity => {
                tracing::info!("Using identity translator");
                Ok(Arc::new(IdentityTranslator))
            }
        }
    }
}
