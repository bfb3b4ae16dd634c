use super::bounding_box::{BoundingBox, NormalizedBox};

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub bbox: Option<BoundingBox>,
    /// Token ends a line with a hyphen and continues in the next token.
    pub hyphenated: bool,
}

impl Token {
    pub fn positioned(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox: Some(bbox),
            hyphenated: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bbox: None,
            hyphenated: false,
        }
    }

    pub fn with_hyphenation(mut self, hyphenated: bool) -> Self {
        self.hyphenated = hyphenated;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedToken {
    pub text: String,
    pub bbox: NormalizedBox,
    pub hyphenated: bool,
}

impl NormalizedToken {
    pub fn new(text: impl Into<String>, bbox: NormalizedBox) -> Self {
        Self {
            text: text.into(),
            bbox,
            hyphenated: false,
        }
    }

    pub fn with_hyphenation(mut self, hyphenated: bool) -> Self {
        self.hyphenated = hyphenated;
        self
    }
}
