mod document_extractor;
mod inference_error;
mod language_classifier;
mod reading_order_model;
mod translator;

pub use document_extractor::{DocumentExtractor, ExtractionError};
pub use inference_error::InferenceError;
pub use language_classifier::LanguageClassifier;
pub use reading_order_model::ReadingOrderModel;
pub use translator::{TranslationError, Translator};
