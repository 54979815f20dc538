//! Configuration system for Numen.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod input_config;
pub mod numen_config;
pub mod observability_config;
pub mod scoring_config;

pub use input_config::InputConfig;
pub use numen_config::{ConfigOverrides, NumerologyConfig};
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
