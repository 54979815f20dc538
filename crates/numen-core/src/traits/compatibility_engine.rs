use crate::errors::NumerologyResult;
use crate::models::{CompatibilityRecord, NumerologySymbol, PersonalSymbols};

/// Compatibility engine: table lookups, score sampling, and personal symbols.
///
/// Lookups and scoring are total. Only string-parsing derivations can fail.
pub trait ICompatibilityEngine: Send + Sync {
    /// Record for the unordered pair, or the generic fallback.
    fn detailed(&self, life_path_1: i32, life_path_2: i32) -> &CompatibilityRecord;

    /// A score drawn from the pair's record band.
    fn score(&self, life_path_1: i32, life_path_2: i32) -> u8;

    /// Symbol for `n` in 1–9, or the universal fallback.
    fn symbol(&self, n: i32) -> &NumerologySymbol;

    /// Life path, destiny, and personality symbols for a person.
    fn personal_symbols(
        &self,
        birth_date: &str,
        full_name: &str,
    ) -> NumerologyResult<PersonalSymbols>;
}
