//! Top-level Numen configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{InputConfig, ObservabilityConfig, ScoringConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::models::ScoreRange;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`NUMEN_*`)
/// 3. Project config (`numen.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NumerologyConfig {
    pub scoring: ScoringConfig,
    pub input: InputConfig,
    pub observability: ObservabilityConfig,
}

/// Caller-supplied overrides, e.g. from a host app's settings screen.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub score_range: Option<ScoreRange>,
    pub lenient: Option<bool>,
    pub validate_calendar: Option<bool>,
}

impl NumerologyConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &NumerologyConfig) -> Result<(), ConfigError> {
        if let Some(ref filter) = config.observability.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if let Err(e) = EnvFilter::try_new(filter) {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_filter".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut NumerologyConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: NumerologyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut NumerologyConfig, other: &NumerologyConfig) {
        if other.scoring.seed.is_some() {
            base.scoring.seed = other.scoring.seed;
        }
        if other.scoring.range.is_some() {
            base.scoring.range = other.scoring.range;
        }
        if other.input.lenient.is_some() {
            base.input.lenient = other.input.lenient;
        }
        if other.input.validate_calendar.is_some() {
            base.input.validate_calendar = other.input.validate_calendar;
        }
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
        if other.observability.json.is_some() {
            base.observability.json = other.observability.json;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut NumerologyConfig) {
        if let Some(v) = env_parsed::<u64>("NUMEN_SCORING_SEED") {
            config.scoring.seed = Some(v);
        }
        if let Some(v) = env_parsed::<ScoreRange>("NUMEN_SCORING_RANGE") {
            config.scoring.range = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("NUMEN_INPUT_LENIENT") {
            config.input.lenient = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("NUMEN_INPUT_VALIDATE_CALENDAR") {
            config.input.validate_calendar = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("NUMEN_LOG_JSON") {
            config.observability.json = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut NumerologyConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.seed {
            config.scoring.seed = Some(v);
        }
        if let Some(v) = overrides.score_range {
            config.scoring.range = Some(v);
        }
        if let Some(v) = overrides.lenient {
            config.input.lenient = Some(v);
        }
        if let Some(v) = overrides.validate_calendar {
            config.input.validate_calendar = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
