use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::NumerologyNumber;

/// A person's three core numbers, master numbers preserved.
///
/// `personality` is `None` for a name made only of vowels: there are no
/// consonants to sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoreNumbers {
    pub life_path: NumerologyNumber,
    pub destiny: NumerologyNumber,
    pub personality: Option<NumerologyNumber>,
}

impl CoreNumbers {
    /// Any of the three is a master number.
    pub fn has_master(&self) -> bool {
        self.life_path.is_master()
            || self.destiny.is_master()
            || self.personality.is_some_and(|p| p.is_master())
    }
}
