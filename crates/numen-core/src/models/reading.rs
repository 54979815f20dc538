use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CompatibilityRecord, CoreNumbers, PersonalSymbols};

/// Input for a two-person reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Person {
    pub full_name: String,
    /// `MM/DD/YYYY`.
    pub birth_date: String,
}

impl Person {
    pub fn new(full_name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// One side of a [`CompatibilityReading`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonProfile {
    pub full_name: String,
    pub numbers: CoreNumbers,
    pub symbols: PersonalSymbols,
}

/// Full love-compatibility reading for two people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompatibilityReading {
    pub first: PersonProfile,
    pub second: PersonProfile,
    pub record: CompatibilityRecord,
    /// Sampled from `record`'s band.
    pub score: u8,
}
