use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Classical element associated with a numerology number.
/// `Universal` is reserved for the fallback symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
    Universal,
}

impl Element {
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Air => "Air",
            Element::Earth => "Earth",
            Element::Universal => "Universal",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
