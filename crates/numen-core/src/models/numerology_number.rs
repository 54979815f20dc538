use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::constants::{MASTER_NUMBERS, MAX_SINGLE_DIGIT, MIN_SINGLE_DIGIT};

/// A digit-reduced numerology number: 1–9, or one of the master numbers 11, 22, 33.
///
/// Master numbers survive reduction here. Table lookups need a value in 1–9,
/// which [`NumerologyNumber::compatibility_safe`] provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, TS)]
#[ts(export)]
pub struct NumerologyNumber(u32);

impl NumerologyNumber {
    /// Reduce a positive sum by repeatedly summing its decimal digits until the
    /// value is a single digit or a master number.
    pub fn reduce(sum: NonZeroU64) -> Self {
        let mut n = sum.get();
        while n > u64::from(MAX_SINGLE_DIGIT) && !is_master(n) {
            n = digit_sum(n);
        }
        // Loop exit guarantees n <= 33.
        Self(n as u32)
    }

    /// Wrap a value that is already reduced. `None` for anything else.
    pub fn from_reduced(value: u32) -> Option<Self> {
        let single = (MIN_SINGLE_DIGIT..=MAX_SINGLE_DIGIT).contains(&value);
        (single || MASTER_NUMBERS.contains(&value)).then_some(Self(value))
    }

    /// The raw reduced value, master numbers preserved.
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_master(self) -> bool {
        MASTER_NUMBERS.contains(&self.0)
    }

    /// Force the number into 1–9 for symbol and compatibility lookups:
    /// `n % 9`, with `0` mapped to `9`. 11 → 2, 22 → 4, 33 → 6.
    pub fn compatibility_safe(self) -> u8 {
        let n = if self.0 > MAX_SINGLE_DIGIT {
            match self.0 % 9 {
                0 => 9,
                r => r,
            }
        } else {
            self.0
        };
        n as u8
    }
}

impl fmt::Display for NumerologyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for NumerologyNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        Self::from_reduced(value).ok_or_else(|| {
            serde::de::Error::custom(format!("{value} is not a reduced numerology number"))
        })
    }
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.iter().any(|&m| u64::from(m) == n)
}
