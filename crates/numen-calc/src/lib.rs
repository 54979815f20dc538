//! # numen-calc
//!
//! Derives a person's core numerology numbers from a birth date and a full name.
//!
//! Every number comes in two forms: the raw [`NumerologyNumber`], which keeps
//! master numbers 11, 22, 33, and a compatibility-safe `u8` in 1–9 used for
//! table lookups.

pub mod birth_date;
pub mod core_numbers;
pub mod letters;
pub mod life_path;
pub mod name_numbers;

pub use birth_date::BirthDate;
pub use core_numbers::{core_numbers, core_numbers_with, CalcOptions};
pub use life_path::{calculate_life_path_from_date, life_path_number, life_path_number_with};
pub use name_numbers::{
    calculate_destiny_number, calculate_personality_number, destiny_number,
    optional_personality_number, personality_number,
};
pub use numen_core::models::NumerologyNumber;
