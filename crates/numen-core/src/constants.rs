/// Numen library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest single-digit numerology number.
pub const MIN_SINGLE_DIGIT: u32 = 1;

/// Largest single-digit numerology number.
pub const MAX_SINGLE_DIGIT: u32 = 9;

/// Master numbers are terminal states of digit reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Upper bound of every compatibility score.
pub const SCORE_CEILING: u8 = 100;

/// Generic fallback record scores, used for pairs with no table entry.
pub const FALLBACK_BASE_SCORE: u8 = 70;
pub const FALLBACK_MIN_SCORE: u8 = 60;
pub const FALLBACK_MAX_SCORE: u8 = 80;

/// Universal fallback symbol glyph and planet.
pub const FALLBACK_SYMBOL: &str = "✨";
pub const FALLBACK_PLANET: &str = "Cosmic";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "numen.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "NUMEN_LOG";

/// Filter used when neither `NUMEN_LOG` nor config supplies one.
pub const DEFAULT_LOG_FILTER: &str = "numen=info";
