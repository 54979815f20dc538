use std::num::NonZeroU64;

use numen_core::errors::{InputError, NumerologyResult};
use numen_core::models::NumerologyNumber;

use crate::birth_date::BirthDate;

/// Raw life path number of a `MM/DD/YYYY` date, master numbers preserved.
/// The calendar is validated.
pub fn life_path_number(birth_date: &str) -> NumerologyResult<NumerologyNumber> {
    life_path_number_with(birth_date, true)
}

/// As [`life_path_number`], optionally skipping the calendar check.
pub fn life_path_number_with(
    birth_date: &str,
    validate_calendar: bool,
) -> NumerologyResult<NumerologyNumber> {
    let date = BirthDate::parse(birth_date, validate_calendar)?;
    let sum = date.component_sum();
    tracing::trace!(birth_date, sum, "life path component sum");

    // Month and day are both >= 1 after parsing.
    let sum = NonZeroU64::new(sum).ok_or_else(|| InputError::MalformedDate {
        input: birth_date.to_string(),
        reason: "components sum to zero".to_string(),
    })?;
    Ok(NumerologyNumber::reduce(sum))
}

/// Compatibility-safe life path (1–9): master numbers are forced down.
pub fn calculate_life_path_from_date(birth_date: &str) -> NumerologyResult<u8> {
    Ok(life_path_number(birth_date)?.compatibility_safe())
}
