use std::sync::Mutex;

use numen_calc::{core_numbers_with, CalcOptions};
use numen_core::config::NumerologyConfig;
use numen_core::errors::NumerologyResult;
use numen_core::models::{
    CompatibilityReading, CompatibilityRecord, CoreNumbers, NumerologySymbol, Person,
    PersonProfile, PersonalSymbols,
};
use numen_core::traits::ICompatibilityEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::database::CompatibilityDatabase;
use crate::personal::{personal_symbols_by_slot, personal_symbols_for};
use crate::scoring::sample_score;

/// Compatibility engine driven by [`NumerologyConfig`].
///
/// Without `scoring.seed` every score comes from the thread RNG. With a seed,
/// the engine owns one generator and successive scores form a reproducible
/// sequence.
pub struct CompatibilityEngine {
    db: &'static CompatibilityDatabase,
    config: NumerologyConfig,
    seeded: Option<Mutex<StdRng>>,
}

impl CompatibilityEngine {
    /// Engine with default config: inclusive sampling, strict input.
    pub fn new() -> Self {
        Self::with_config(NumerologyConfig::default())
    }

    pub fn with_config(config: NumerologyConfig) -> Self {
        let seeded = config
            .scoring
            .seed
            .map(|seed| Mutex::new(StdRng::seed_from_u64(seed)));
        Self {
            db: CompatibilityDatabase::builtin(),
            config,
            seeded,
        }
    }

    pub fn config(&self) -> &NumerologyConfig {
        &self.config
    }

    pub fn database(&self) -> &'static CompatibilityDatabase {
        self.db
    }

    /// Draw a score from `record` according to the configured range and RNG.
    pub fn sample(&self, record: &CompatibilityRecord) -> u8 {
        let range = self.config.scoring.effective_range();
        match &self.seeded {
            Some(rng) => {
                // A poisoned lock still holds a usable generator.
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                sample_score(record, range, &mut *rng)
            }
            None => sample_score(record, range, &mut rand::thread_rng()),
        }
    }

    /// Raw core numbers, master numbers preserved.
    pub fn core_numbers(
        &self,
        birth_date: &str,
        full_name: &str,
    ) -> NumerologyResult<CoreNumbers> {
        core_numbers_with(birth_date, full_name, self.calc_options())
    }

    /// Full two-person reading. Lenient mode does not apply: a reading needs
    /// real life path numbers on both sides. A vowel-only name is not bad
    /// input; its profile carries the universal personality symbol.
    pub fn reading(
        &self,
        first: &Person,
        second: &Person,
    ) -> NumerologyResult<CompatibilityReading> {
        let first = self.profile(first)?;
        let second = self.profile(second)?;

        let record = self
            .db
            .get_detailed_compatibility(
                i32::from(first.numbers.life_path.compatibility_safe()),
                i32::from(second.numbers.life_path.compatibility_safe()),
            )
            .clone();
        let score = self.sample(&record);

        tracing::debug!(
            first = first.numbers.life_path.value(),
            second = second.numbers.life_path.value(),
            score,
            "compatibility reading"
        );

        Ok(CompatibilityReading {
            first,
            second,
            record,
            score,
        })
    }

    fn profile(&self, person: &Person) -> NumerologyResult<PersonProfile> {
        let numbers = self.core_numbers(&person.birth_date, &person.full_name)?;
        Ok(PersonProfile {
            full_name: person.full_name.clone(),
            symbols: personal_symbols_for(self.db, &numbers),
            numbers,
        })
    }

    fn calc_options(&self) -> CalcOptions {
        CalcOptions {
            validate_calendar: self.config.input.effective_validate_calendar(),
        }
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ICompatibilityEngine for CompatibilityEngine {
    fn detailed(&self, life_path_1: i32, life_path_2: i32) -> &CompatibilityRecord {
        self.db.get_detailed_compatibility(life_path_1, life_path_2)
    }

    fn score(&self, life_path_1: i32, life_path_2: i32) -> u8 {
        let record = self.db.get_detailed_compatibility(life_path_1, life_path_2);
        self.sample(record)
    }

    fn symbol(&self, n: i32) -> &NumerologySymbol {
        self.db.get_numerology_symbol(n)
    }

    fn personal_symbols(
        &self,
        birth_date: &str,
        full_name: &str,
    ) -> NumerologyResult<PersonalSymbols> {
        match self.core_numbers(birth_date, full_name) {
            Ok(numbers) => Ok(personal_symbols_for(self.db, &numbers)),
            Err(_) if self.config.input.effective_lenient() => Ok(personal_symbols_by_slot(
                self.db,
                birth_date,
                full_name,
                self.calc_options(),
            )),
            Err(e) => Err(e),
        }
    }
}
