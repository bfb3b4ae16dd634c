mod identity_translator;
mod lindat_translator;
mod translator_factory;

pub use identity_translator::IdentityTranslator;
pub use lindat_translator::{
    EmbeddedModels, FALLBACK_MODELS, LINDAT_BASE_URL, LindatTranslator, ModelItem, ModelsResponse,
};
pub use translator_factory::{TranslatorFactory, TranslatorFactoryError};
