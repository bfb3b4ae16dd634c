mod alto_adapter;
mod blocking;
mod composite_extractor;
mod csv_adapter;
mod docx_adapter;
mod extractor_factory;
mod html_adapter;
mod json_adapter;
mod key_pattern;
mod mock_extractor;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

pub use alto_adapter::{AltoAdapter, parse_alto};
pub use blocking::DEFAULT_EXTRACTION_TIMEOUT;
pub use composite_extractor::CompositeExtractor;
pub use csv_adapter::{CsvAdapter, csv_to_text};
pub use docx_adapter::{DocxAdapter, parse_docx};
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use html_adapter::{HtmlAdapter, html_to_text};
pub use json_adapter::{JsonAdapter, json_to_text};
pub use key_pattern::{DEFAULT_TEXT_KEY_PATTERN, KeyPattern};
pub use mock_extractor::MockExtractor;
pub use pdf_adapter::{PdfAdapter, SpanGeometry, flip_to_top_left, spans_to_words};
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
