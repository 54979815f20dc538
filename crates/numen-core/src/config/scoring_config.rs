//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::models::ScoreRange;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Seed for deterministic sampling. Unset: thread RNG.
    pub seed: Option<u64>,
    /// Sampling band. Default: inclusive.
    pub range: Option<ScoreRange>,
}

impl ScoringConfig {
    pub fn effective_range(&self) -> ScoreRange {
        self.range.unwrap_or_default()
    }
}
