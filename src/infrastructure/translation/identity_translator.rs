use async_trait::async_trait;

use crate::application::ports::{TranslationError, Translator};

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}
