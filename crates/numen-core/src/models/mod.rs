pub mod compatibility_record;
pub mod core_numbers;
pub mod element;
pub mod life_path_pair;
pub mod numerology_number;
pub mod numerology_symbol;
pub mod personal_symbols;
pub mod reading;
pub mod score_range;

pub use compatibility_record::CompatibilityRecord;
pub use core_numbers::CoreNumbers;
pub use element::Element;
pub use life_path_pair::LifePathPair;
pub use numerology_number::{digit_sum, NumerologyNumber};
pub use numerology_symbol::NumerologySymbol;
pub use personal_symbols::PersonalSymbols;
pub use reading::{CompatibilityReading, Person, PersonProfile};
pub use score_range::ScoreRange;
