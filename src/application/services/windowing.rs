use std::num::NonZeroUsize;

use crate::domain::{NormalizedToken, Window};

pub const DEFAULT_WINDOW_CAPACITY: usize = 350;

/// Splits a page's tokens into fixed-size, non-overlapping windows.
///
/// Token `i` lands in window `i / capacity`. Ordering relations that cross a
/// window boundary are never seen by the model, so text flowing from the end
/// of one window into the next keeps its extraction order at that seam.
#[derive(Debug, Clone, Copy)]
pub struct WindowingEngine {
    capacity: NonZeroUsize,
}

#[derive(Debug, thiserror::Error)]
#[error("window capacity must be greater than zero")]
pub struct ZeroCapacityError;

impl WindowingEngine {
    pub fn new(capacity: usize) -> Result<Self, ZeroCapacityError> {
        NonZeroUsize::new(capacity)
            .map(|capacity| Self { capacity })
            .ok_or(ZeroCapacityError)
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn partition<'a>(&self, tokens: &'a [NormalizedToken]) -> Vec<Window<'a>> {
        let capacity = self.capacity.get();
        tokens
            .chunks(capacity)
            .enumerate()
            .map(|(index, chunk)| Window::new(index, index * capacity, chunk))
            .collect()
    }

    pub fn window_count(&self, token_count: usize) -> usize {
        token_count.div_ceil(self.capacity.get())
    }
}

impl Default for WindowingEngine {
    fn default() -> Self {
        Self {
            capacity: NonZeroUsize::new(DEFAULT_WINDOW_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
