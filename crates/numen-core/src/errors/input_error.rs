//! Input validation errors.

use super::error_code::{self, NumerologyErrorCode};

/// Errors raised when a birth date or name cannot be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("malformed birth date {input:?}: {reason}")]
    MalformedDate { input: String, reason: String },

    #[error("birth date {input:?} has an out-of-range {component}: {value}")]
    InvalidDateComponent {
        input: String,
        component: &'static str,
        value: u32,
    },

    #[error("birth date {input:?} does not exist on the calendar")]
    ImpossibleDate { input: String },

    #[error("name {input:?} contains no letters")]
    NoLetters { input: String },

    #[error("name {input:?} contains no consonants")]
    NoConsonants { input: String },
}

impl NumerologyErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
