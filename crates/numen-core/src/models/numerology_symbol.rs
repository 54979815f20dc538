use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Element;
use crate::constants::{FALLBACK_PLANET, FALLBACK_SYMBOL};

/// Symbolic correspondences of a single-digit number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumerologySymbol {
    /// Single glyph, e.g. `☉`.
    pub symbol: String,
    pub element: Element,
    pub color: String,
    pub planet: String,
    pub meaning: String,
}

impl NumerologySymbol {
    /// True for the universal fallback returned outside 1–9.
    pub fn is_fallback(&self) -> bool {
        self.element == Element::Universal
            && self.symbol == FALLBACK_SYMBOL
            && self.planet == FALLBACK_PLANET
    }
}
