//! Score sampling within a record's curated band.

use numen_core::models::{CompatibilityRecord, ScoreRange};
use rand::Rng;

use crate::database::get_detailed_compatibility;

/// Draw a score from `record`'s band using the given RNG.
///
/// `Inclusive` draws from `min..=max`. `HalfOpen` draws from `min..max` and
/// returns `min` when the band is empty.
pub fn sample_score<R: Rng + ?Sized>(
    record: &CompatibilityRecord,
    range: ScoreRange,
    rng: &mut R,
) -> u8 {
    let (min, max) = (record.min_score, record.max_score.max(record.min_score));
    let score = match range {
        ScoreRange::Inclusive => rng.gen_range(min..=max),
        ScoreRange::HalfOpen if min < max => rng.gen_range(min..max),
        ScoreRange::HalfOpen => min,
    };
    tracing::trace!(min, max, ?range, score, "sampled compatibility score");
    score
}

/// A fresh score for the pair, drawn inclusively with the thread RNG.
/// Repeated calls may differ; every result lies in the pair's band.
pub fn generate_compatibility_score(life_path_1: i32, life_path_2: i32) -> u8 {
    generate_compatibility_score_with(life_path_1, life_path_2, &mut rand::thread_rng())
}

/// As [`generate_compatibility_score`], with an injected RNG.
pub fn generate_compatibility_score_with<R: Rng + ?Sized>(
    life_path_1: i32,
    life_path_2: i32,
    rng: &mut R,
) -> u8 {
    let record = get_detailed_compatibility(life_path_1, life_path_2);
    sample_score(record, ScoreRange::Inclusive, rng)
}
