use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable two element tuple. Used as the `(state, symbol)` key of transition tables and as
/// the element type produced by [`DiscreteSet::cross`](crate::set::DiscreteSet::cross).
///
/// Equality and hashing are component-wise. Ordering is lexicographic, first component first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderedPair<E, F> {
    first: E,
    second: F,
}

impl<E, F> OrderedPair<E, F> {
    pub fn new(first: E, second: F) -> Self {
        OrderedPair { first, second }
    }

    pub fn first(&self) -> &E {
        &self.first
    }

    pub fn second(&self) -> &F {
        &self.second
    }

    /// Consume the pair and hand back both components as a plain tuple
    pub fn into_inner(self) -> (E, F) {
        (self.first, self.second)
    }
}

impl<E, F> From<(E, F)> for OrderedPair<E, F> {
    fn from((first, second): (E, F)) -> Self {
        OrderedPair::new(first, second)
    }
}

impl<E: fmt::Display, F: fmt::Display> fmt::Display for OrderedPair<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
