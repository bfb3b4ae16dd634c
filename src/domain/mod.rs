mod bounding_box;
mod document;
mod language;
mod page;
mod pipeline_report;
mod reading_order;
mod token;
mod translation_segment;
mod window;

pub use bounding_box::{BoundingBox, NormalizedBox};
pub use document::{Document, DocumentFormat, DocumentId};
pub use language::{FallbackReason, LanguageDecision, LanguagePrediction, iso639_3_to_iso639_1};
pub use page::{ExtractedContent, Page};
pub use pipeline_report::{Degradation, PipelineReport, Stage};
pub use reading_order::{PermutationError, ReadingOrder};
pub use token::{NormalizedToken, Token};
pub use translation_segment::TranslationSegment;
pub use window::{MergePolicy, Window};
