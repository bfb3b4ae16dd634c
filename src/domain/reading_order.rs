use std::fmt;

/// Permutation of token indices for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadingOrder(Vec<usize>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermutationError {
    #[error("expected {expected} indices, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("index {index} out of range for {len} tokens")]
    OutOfRange { index: usize, len: usize },
    #[error("index {0} appears more than once")]
    Duplicate(usize),
}

impl ReadingOrder {
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    pub fn from_permutation(order: Vec<usize>, len: usize) -> Result<Self, PermutationError> {
        Self::validate(&order, len)?;
        Ok(Self(order))
    }

    /// Checks that `order` lists every index in `0..len` exactly once.
    pub fn validate(order: &[usize], len: usize) -> Result<(), PermutationError> {
        if order.len() != len {
            return Err(PermutationError::LengthMismatch {
                expected: len,
                actual: order.len(),
            });
        }

        let mut seen = vec![false; len];
        for &index in order {
            let slot = seen
                .get_mut(index)
                .ok_or(PermutationError::OutOfRange { index, len })?;
            if *slot {
                return Err(PermutationError::Duplicate(index));
            }
            *slot = true;
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl fmt::Display for ReadingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
