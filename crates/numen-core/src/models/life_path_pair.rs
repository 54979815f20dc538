use std::fmt;

use crate::constants::{MAX_SINGLE_DIGIT, MIN_SINGLE_DIGIT};

/// Unordered pair of life-path numbers, normalized so `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LifePathPair {
    low: i32,
    high: i32,
}

impl LifePathPair {
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(self) -> i32 {
        self.low
    }

    pub fn high(self) -> i32 {
        self.high
    }

    /// Both members lie in 1–9, i.e. the pair can have a table entry.
    pub fn is_single_digit(self) -> bool {
        let range = MIN_SINGLE_DIGIT as i32..=MAX_SINGLE_DIGIT as i32;
        range.contains(&self.low) && range.contains(&self.high)
    }

    /// All 45 unordered single-digit pairs, in `(low, high)` order.
    pub fn all_single_digit() -> impl Iterator<Item = LifePathPair> {
        let max = MAX_SINGLE_DIGIT as i32;
        (1..=max).flat_map(move |low| (low..=max).map(move |high| LifePathPair { low, high }))
    }
}

impl fmt::Display for LifePathPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl From<(i32, i32)> for LifePathPair {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}
