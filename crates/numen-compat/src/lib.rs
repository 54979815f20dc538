//! # numen-compat
//!
//! Compatibility readings over life-path numbers: a hand-authored pair table,
//! score sampling within each pair's curated band, symbolic correspondences
//! for the numbers 1–9, and full two-person readings.
//!
//! Every lookup is total. Pairs without an entry get a generic record, numbers
//! outside 1–9 get the universal symbol.

pub mod database;
pub mod engine;
pub mod personal;
pub mod scoring;
mod table;

pub use database::{get_detailed_compatibility, get_numerology_symbol, CompatibilityDatabase};
pub use engine::CompatibilityEngine;
pub use personal::{
    calculate_personal_symbols, calculate_personal_symbols_or_fallback, personal_symbols_for,
};
pub use scoring::{generate_compatibility_score, generate_compatibility_score_with, sample_score};
