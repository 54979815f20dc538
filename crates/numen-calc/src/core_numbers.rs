use numen_core::errors::NumerologyResult;
use numen_core::models::CoreNumbers;

use crate::{destiny_number, life_path_number_with, optional_personality_number};

/// Knobs for number derivation.
#[derive(Debug, Clone, Copy)]
pub struct CalcOptions {
    /// Reject birth dates that do not exist on the calendar.
    pub validate_calendar: bool,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            validate_calendar: true,
        }
    }
}

/// Life path, destiny, and personality numbers, master numbers preserved.
/// A vowel-only name has no personality number; every other name or date
/// problem is an error.
pub fn core_numbers(birth_date: &str, full_name: &str) -> NumerologyResult<CoreNumbers> {
    core_numbers_with(birth_date, full_name, CalcOptions::default())
}

pub fn core_numbers_with(
    birth_date: &str,
    full_name: &str,
    options: CalcOptions,
) -> NumerologyResult<CoreNumbers> {
    Ok(CoreNumbers {
        life_path: life_path_number_with(birth_date, options.validate_calendar)?,
        destiny: destiny_number(full_name)?,
        personality: optional_personality_number(full_name)?,
    })
}
