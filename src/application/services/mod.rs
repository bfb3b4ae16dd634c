mod geometry_normalizer;
mod hyphenation;
mod language_identifier;
mod reading_order_service;
mod translation_chunker;
mod translation_pipeline;
mod translation_service;
mod windowing;

pub use geometry_normalizer::{normalize_box, normalize_page};
pub use hyphenation::{is_line_end_hyphen, join_tokens, strip_trailing_hyphen};
pub use language_identifier::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_FALLBACK_CODE, DEFAULT_MAX_SAMPLE_CHARS,
    DEFAULT_MIN_TEXT_CHARS, LanguageIdentifier, LanguagePolicy, prepare_sample,
};
pub use reading_order_service::{
    DocumentReconstruction, PAGE_SEPARATOR, PageReconstruction, ReadingOrderReconstructor,
    WindowFailure,
};
pub use translation_chunker::{DEFAULT_MAX_SEGMENT_CHARS, reassemble, split_into_segments};
pub use translation_pipeline::{PipelineError, PipelineOutput, TranslationPipeline};
pub use translation_service::{
    DEFAULT_MAX_ATTEMPTS, INITIAL_BACKOFF, MAX_BACKOFF, RetryPolicy, SegmentFailure,
    TranslationOutcome, TranslationService,
};
pub use windowing::{DEFAULT_WINDOW_CAPACITY, WindowingEngine, ZeroCapacityError};
