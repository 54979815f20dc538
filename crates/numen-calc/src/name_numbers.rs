use std::num::NonZeroU64;

use numen_core::errors::{InputError, NumerologyResult};
use numen_core::models::NumerologyNumber;

use crate::letters::{is_consonant, pythagorean_value};

/// Raw destiny number: every ASCII letter of the name, master numbers preserved.
/// Non-letters are stripped.
pub fn destiny_number(full_name: &str) -> NumerologyResult<NumerologyNumber> {
    let sum = letter_sum(full_name, |c| c.is_ascii_alphabetic());
    tracing::trace!(full_name, sum, "destiny letter sum");
    let sum = NonZeroU64::new(sum).ok_or_else(|| InputError::NoLetters {
        input: full_name.to_string(),
    })?;
    Ok(NumerologyNumber::reduce(sum))
}

/// Raw personality number: consonants only, master numbers preserved.
///
/// A vowel-only name is `NoConsonants`; use [`optional_personality_number`]
/// where such a name is a valid reading.
pub fn personality_number(full_name: &str) -> NumerologyResult<NumerologyNumber> {
    optional_personality_number(full_name)?.ok_or_else(|| {
        InputError::NoConsonants {
            input: full_name.to_string(),
        }
        .into()
    })
}

/// Raw personality number, `None` when every letter of the name is a vowel.
/// A name with no letters at all is still `NoLetters`.
pub fn optional_personality_number(
    full_name: &str,
) -> NumerologyResult<Option<NumerologyNumber>> {
    if !full_name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(InputError::NoLetters {
            input: full_name.to_string(),
        }
        .into());
    }
    let sum = letter_sum(full_name, is_consonant);
    tracing::trace!(full_name, sum, "personality consonant sum");
    Ok(NonZeroU64::new(sum).map(NumerologyNumber::reduce))
}

/// Compatibility-safe destiny number (1–9).
pub fn calculate_destiny_number(full_name: &str) -> NumerologyResult<u8> {
    Ok(destiny_number(full_name)?.compatibility_safe())
}

/// Compatibility-safe personality number (1–9).
pub fn calculate_personality_number(full_name: &str) -> NumerologyResult<u8> {
    Ok(personality_number(full_name)?.compatibility_safe())
}

fn letter_sum(full_name: &str, keep: impl Fn(char) -> bool) -> u64 {
    full_name
        .chars()
        .filter(|&c| keep(c))
        .filter_map(pythagorean_value)
        .map(u64::from)
        .sum()
}
