//! Ensures every exported model derives `TS`.
//!
//! Run with: cargo test -p numen-core export_bindings
//! Generated files appear in numen-core/bindings/*.ts for the mobile client.

use numen_core::models::{
    CompatibilityReading, CompatibilityRecord, CoreNumbers, Element, NumerologyNumber,
    NumerologySymbol, Person, PersonProfile, PersonalSymbols, ScoreRange,
};

#[test]
fn export_bindings() {
    // ts-rs generates .ts files through the #[ts(export)] attribute.
    // This test just validates all types are importable and TS-derivable.
    let _ = std::any::type_name::<CompatibilityRecord>();
    let _ = std::any::type_name::<NumerologySymbol>();
    let _ = std::any::type_name::<Element>();
    let _ = std::any::type_name::<NumerologyNumber>();
    let _ = std::any::type_name::<CoreNumbers>();
    let _ = std::any::type_name::<PersonalSymbols>();
    let _ = std::any::type_name::<Person>();
    let _ = std::any::type_name::<PersonProfile>();
    let _ = std::any::type_name::<CompatibilityReading>();
    let _ = std::any::type_name::<ScoreRange>();

    assert_exports::<CompatibilityRecord>();
    assert_exports::<CompatibilityReading>();
    assert_exports::<ScoreRange>();
}

fn assert_exports<T: ts_rs::TS>() {}
