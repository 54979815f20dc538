use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::NumerologySymbol;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonalSymbols {
    pub life_path_symbol: NumerologySymbol,
    pub destiny_symbol: NumerologySymbol,
    pub personality_symbol: NumerologySymbol,
}
