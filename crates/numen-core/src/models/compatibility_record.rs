use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::SCORE_CEILING;

/// Hand-authored compatibility reading for one unordered life-path pair.
///
/// Scores are a curated band rather than a point value; a reading samples
/// within `[min_score, max_score]` so repeat visits feel fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompatibilityRecord {
    pub base_score: u8,
    pub min_score: u8,
    pub max_score: u8,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub description: String,
    pub relationship_dynamic: String,
    pub advice: String,
}

impl CompatibilityRecord {
    /// `min <= base <= max <= 100`.
    pub fn has_valid_range(&self) -> bool {
        self.min_score <= self.base_score
            && self.base_score <= self.max_score
            && self.max_score <= SCORE_CEILING
    }

    /// Width of the sampling band.
    pub fn spread(&self) -> u8 {
        self.max_score.saturating_sub(self.min_score)
    }

    /// True if `score` lies inside the inclusive band.
    pub fn contains(&self, score: u8) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }
}
