use numen_calc::{
    core_numbers, destiny_number, life_path_number_with, optional_personality_number,
    CalcOptions,
};
use numen_core::errors::NumerologyResult;
use numen_core::models::{CoreNumbers, NumerologyNumber, NumerologySymbol, PersonalSymbols};

use crate::database::CompatibilityDatabase;

/// Life path, destiny, and personality symbols for a person.
///
/// Master numbers are forced into 1–9 before lookup, so 11 shares the
/// symbol of 2, 22 of 4, and 33 of 6. A vowel-only name gets the universal
/// symbol in the personality slot.
pub fn calculate_personal_symbols(
    birth_date: &str,
    full_name: &str,
) -> NumerologyResult<PersonalSymbols> {
    let numbers = core_numbers(birth_date, full_name)?;
    Ok(personal_symbols_for(CompatibilityDatabase::builtin(), &numbers))
}

/// As [`calculate_personal_symbols`], mapping each slot with invalid input to
/// the universal symbol instead of failing. A bad date only affects the life
/// path slot, a name without letters only the destiny and personality slots.
pub fn calculate_personal_symbols_or_fallback(
    birth_date: &str,
    full_name: &str,
) -> PersonalSymbols {
    personal_symbols_by_slot(
        CompatibilityDatabase::builtin(),
        birth_date,
        full_name,
        CalcOptions::default(),
    )
}

/// Map already-derived numbers through the symbol table of `db`.
pub fn personal_symbols_for(db: &CompatibilityDatabase, numbers: &CoreNumbers) -> PersonalSymbols {
    PersonalSymbols {
        life_path_symbol: slot_symbol(db, Some(numbers.life_path)),
        destiny_symbol: slot_symbol(db, Some(numbers.destiny)),
        personality_symbol: slot_symbol(db, numbers.personality),
    }
}

/// Derive each slot on its own, so one bad input only costs its own slots.
pub(crate) fn personal_symbols_by_slot(
    db: &CompatibilityDatabase,
    birth_date: &str,
    full_name: &str,
    options: CalcOptions,
) -> PersonalSymbols {
    let resolve = |slot: &'static str, number: NumerologyResult<Option<NumerologyNumber>>| {
        match number {
            Ok(n) => slot_symbol(db, n),
            Err(e) => {
                tracing::warn!(slot, error = %e, "invalid reading input, using universal symbol");
                db.universal_symbol().clone()
            }
        }
    };
    PersonalSymbols {
        life_path_symbol: resolve(
            "life_path",
            life_path_number_with(birth_date, options.validate_calendar).map(Some),
        ),
        destiny_symbol: resolve("destiny", destiny_number(full_name).map(Some)),
        personality_symbol: resolve("personality", optional_personality_number(full_name)),
    }
}

fn slot_symbol(db: &CompatibilityDatabase, number: Option<NumerologyNumber>) -> NumerologySymbol {
    match number {
        Some(n) => db.get_numerology_symbol(i32::from(n.compatibility_safe())).clone(),
        None => db.universal_symbol().clone(),
    }
}
