use super::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub tokens: Vec<Token>,
}

impl Page {
    pub fn new(index: usize, width: f64, height: f64) -> Self {
        Self {
            index,
            width,
            height,
            tokens: Vec::new(),
        }
    }

    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// What an extractor produced for a document.
///
/// Positional formats yield pages of boxed tokens that still need reading-order
/// reconstruction; every other format yields its text directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedContent {
    Paged(Vec<Page>),
    Flat(String),
}

impl ExtractedContent {
    pub fn page_count(&self) -> usize {
        match self {
            Self::Paged(pages) => pages.len(),
            Self::Flat(_) => 0,
        }
    }

    pub fn token_count(&self) -> usize {
        match self {
            Self::Paged(pages) => pages.iter().map(|p| p.tokens.len()).sum(),
            Self::Flat(text) => text.split_whitespace().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Paged(pages) => pages.iter().all(Page::is_empty),
            Self::Flat(text) => text.trim().is_empty(),
        }
    }
}
