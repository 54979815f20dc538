//! Input handling configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Map invalid birth dates and names to the universal fallback symbol
    /// instead of returning an error. Default: false.
    pub lenient: Option<bool>,
    /// Reject dates that do not exist (e.g. `02/30/1990`). Default: true.
    pub validate_calendar: Option<bool>,
}

impl InputConfig {
    pub fn effective_lenient(&self) -> bool {
        self.lenient.unwrap_or(false)
    }

    pub fn effective_validate_calendar(&self) -> bool {
        self.validate_calendar.unwrap_or(true)
    }
}
