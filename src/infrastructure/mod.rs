pub mod language;
pub mod observability;
pub mod reading_order;
pub mod text_processing;
pub mod translation;
