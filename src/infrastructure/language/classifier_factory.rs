use std::sync::Arc;

use crate::application::ports::LanguageClassifier;
use crate::presentation::config::{LanguageProvider, LanguageSettings};

use super::fixed_classifier::FixedClassifier;
use super::lingua_classifier::LinguaClassifier;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierFactoryError {
    #[error("fixed_code is required for the fixed language provider")]
    MissingFixedCode,
}

pub struct ClassifierFactory;

impl ClassifierFactory {
    pub fn create(
        settings: &LanguageSettings,
    ) -> Result<Arc<dyn LanguageClassifier>, ClassifierFactoryError> {
        match settings.provider {
            LanguageProvider::Lingua => {
                tracing::info!("Loading lingua language classifier");
                Ok(Arc::new(LinguaClassifier::new()))
            }
            LanguageProvider::Fixed => {
                let code = settings
                    .fixed_code
                    .clone()
                    .filter(|c| !c.is_empty())
                    .ok_or(ClassifierFactoryError::MissingFixedCode)?;
                tracing::info!(code = %code, "Using fixed language classifier");
                Ok(Arc::new(FixedClassifier::new(code, 1.0)))
            }
        }
    }
}
