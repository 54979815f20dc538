use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a score is drawn from a record's `[min, max]` band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreRange {
    /// Uniform over `min..=max`.
    #[default]
    Inclusive,
    /// Uniform over `min..max`, reproducing the legacy mobile client, which
    /// never reached `max`. Collapses to `min` when the band is empty.
    HalfOpen,
}

impl std::str::FromStr for ScoreRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inclusive" => Ok(ScoreRange::Inclusive),
            "half_open" | "half-open" => Ok(ScoreRange::HalfOpen),
            other => Err(format!("unknown score range {other:?}")),
        }
    }
}
