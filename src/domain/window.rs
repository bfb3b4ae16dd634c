use serde::Deserialize;

use super::token::NormalizedToken;

/// Contiguous slice of a page's tokens sized for one inference call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    pub index: usize,
    /// Page-level index of the first token in this window.
    pub offset: usize,
    pub tokens: &'a [NormalizedToken],
}

impl<'a> Window<'a> {
    pub fn new(index: usize, offset: usize, tokens: &'a [NormalizedToken]) -> Self {
        Self {
            index,
            offset,
            tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn page_index_of(&self, local: usize) -> usize {
        self.offset + local
    }
}

/// How per-window orderings are combined into a page ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Windows keep their extraction order relative to each other; only the
    /// order inside each window is refined.
    #[default]
    ConcatenateWindows,
}
