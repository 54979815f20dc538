use std::collections::HashMap;
use std::sync::LazyLock;

use numen_core::models::{CompatibilityRecord, LifePathPair, NumerologySymbol};

use crate::table::{
    PairEntry, SymbolEntry, GENERIC_ENTRY, PAIR_TABLE, SYMBOL_TABLE, UNIVERSAL_SYMBOL,
};

static BUILTIN: LazyLock<CompatibilityDatabase> =
    LazyLock::new(CompatibilityDatabase::from_tables);

/// Immutable compatibility and symbol tables.
///
/// Built once per process from the hand-authored source data and shared
/// read-only; every method is safe to call from any thread.
#[derive(Debug)]
pub struct CompatibilityDatabase {
    records: HashMap<LifePathPair, CompatibilityRecord>,
    generic: CompatibilityRecord,
    symbols: Vec<NumerologySymbol>,
    universal: NumerologySymbol,
}

impl CompatibilityDatabase {
    /// The process-wide built-in database.
    pub fn builtin() -> &'static CompatibilityDatabase {
        &BUILTIN
    }

    fn from_tables() -> Self {
        let records = PAIR_TABLE
            .iter()
            .map(|entry| (LifePathPair::new(entry.low, entry.high), to_record(entry)))
            .collect();
        Self {
            records,
            generic: to_record(&GENERIC_ENTRY),
            symbols: SYMBOL_TABLE.iter().map(to_symbol).collect(),
            universal: to_symbol(&UNIVERSAL_SYMBOL),
        }
    }

    /// Record for the unordered pair, or the generic fallback
    /// (`base 70`, band `60..=80`) when the pair has no entry.
    ///
    /// Master numbers must be reduced to 1–9 first; 11, 22, 33 have no entries.
    pub fn get_detailed_compatibility(
        &self,
        life_path_1: i32,
        life_path_2: i32,
    ) -> &CompatibilityRecord {
        let pair = LifePathPair::new(life_path_1, life_path_2);
        match self.records.get(&pair) {
            Some(record) => record,
            None => {
                tracing::debug!(%pair, "no compatibility entry, using generic record");
                &self.generic
            }
        }
    }

    /// Symbol for `n` in 1–9, otherwise the universal fallback.
    pub fn get_numerology_symbol(&self, n: i32) -> &NumerologySymbol {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.symbols.get(index))
            .unwrap_or_else(|| {
                tracing::debug!(n, "no symbol for number, using universal symbol");
                &self.universal
            })
    }

    /// Explicit entry for the pair, without falling back.
    pub fn entry(&self, pair: LifePathPair) -> Option<&CompatibilityRecord> {
        self.records.get(&pair)
    }

    pub fn generic_record(&self) -> &CompatibilityRecord {
        &self.generic
    }

    pub fn universal_symbol(&self) -> &NumerologySymbol {
        &self.universal
    }

    /// Number of explicit pair entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All explicit entries, in `(low, high)` order.
    pub fn entries(&self) -> Vec<(LifePathPair, &CompatibilityRecord)> {
        let mut entries: Vec<_> = self.records.iter().map(|(pair, r)| (*pair, r)).collect();
        entries.sort_by_key(|(pair, _)| *pair);
        entries
    }
}

/// [`CompatibilityDatabase::get_detailed_compatibility`] on the built-in database.
pub fn get_detailed_compatibility(
    life_path_1: i32,
    life_path_2: i32,
) -> &'static CompatibilityRecord {
    CompatibilityDatabase::builtin().get_detailed_compatibility(life_path_1, life_path_2)
}

/// [`CompatibilityDatabase::get_numerology_symbol`] on the built-in database.
pub fn get_numerology_symbol(n: i32) -> &'static NumerologySymbol {
    CompatibilityDatabase::builtin().get_numerology_symbol(n)
}

fn to_record(entry: &PairEntry) -> CompatibilityRecord {
    CompatibilityRecord {
        base_score: entry.base,
        min_score: entry.min,
        max_score: entry.max,
        strengths: entry.strengths.iter().map(|s| s.to_string()).collect(),
        challenges: entry.challenges.iter().map(|s| s.to_string()).collect(),
        description: entry.description.to_string(),
        relationship_dynamic: entry.dynamic.to_string(),
        advice: entry.advice.to_string(),
    }
}

fn to_symbol(entry: &SymbolEntry) -> NumerologySymbol {
    NumerologySymbol {
        symbol: entry.symbol.to_string(),
        element: entry.element,
        color: entry.color.to_string(),
        planet: entry.planet.to_string(),
        meaning: entry.meaning.to_string(),
    }
}
