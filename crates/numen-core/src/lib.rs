//! # numen-core
//!
//! Foundation crate for the Numen numerology engine.
//! Defines all models, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::NumerologyConfig;
pub use errors::{NumerologyError, NumerologyResult};
pub use models::{
    CompatibilityRecord, CoreNumbers, Element, LifePathPair, NumerologyNumber,
    NumerologySymbol, PersonalSymbols, ScoreRange,
};
