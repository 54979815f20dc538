use numen_compat::*;
use numen_core::models::{Element, LifePathPair};
use numen_core::NumerologyError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ── Detailed compatibility ───────────────────────────────────────────────

#[test]
fn lookup_is_symmetric_for_every_pair() {
    for a in 1..=9 {
        for b in 1..=9 {
            assert_eq!(
                get_detailed_compatibility(a, b),
                get_detailed_compatibility(b, a),
                "asymmetric at ({a}, {b})"
            );
        }
    }
}

#[test]
fn every_entry_has_a_valid_band_and_content() {
    for (pair, record) in CompatibilityDatabase::builtin().entries() {
        assert!(record.has_valid_range(), "bad band for {pair}: {record:?}");
        assert!(!record.strengths.is_empty(), "{pair} has no strengths");
        assert!(!record.challenges.is_empty(), "{pair} has no challenges");
        assert!(!record.description.is_empty());
        assert!(!record.relationship_dynamic.is_empty());
        assert!(!record.advice.is_empty());
    }
}

#[test]
fn single_digit_pairs_never_hit_the_generic_record() {
    let generic = CompatibilityDatabase::builtin().generic_record();
    for pair in LifePathPair::all_single_digit() {
        let record = get_detailed_compatibility(pair.low(), pair.high());
        assert!(!std::ptr::eq(record, generic), "{pair} fell back");
    }
}

#[test]
fn out_of_range_pairs_get_the_generic_record() {
    for (a, b) in [(0, 5), (11, 2), (22, 33), (-1, -1), (10, 10), (i32::MAX, i32::MIN)] {
        let record = get_detailed_compatibility(a, b);
        assert_eq!(record.base_score, 70);
        assert_eq!(record.min_score, 60);
        assert_eq!(record.max_score, 80);
        assert_eq!(record, CompatibilityDatabase::builtin().generic_record());
    }
}

#[test]
fn lookup_is_idempotent() {
    let first = get_detailed_compatibility(2, 6).clone();
    let second = get_detailed_compatibility(2, 6).clone();
    assert_eq!(first, second);
}

#[test]
fn record_serializes_for_the_client() {
    let json = serde_json::to_value(get_detailed_compatibility(6, 9)).unwrap();
    assert_eq!(json["baseScore"], 93);
    assert!(json["strengths"].as_array().is_some_and(|s| !s.is_empty()));
    assert!(json["relationshipDynamic"].is_string());
}

// ── Symbols ──────────────────────────────────────────────────────────────

#[test]
fn single_digit_symbols_are_defined_and_distinct() {
    let mut glyphs = Vec::new();
    for n in 1..=9 {
        let symbol = get_numerology_symbol(n);
        assert!(!symbol.is_fallback(), "{n} fell back");
        assert_ne!(symbol.element, Element::Universal);
        glyphs.push(symbol.symbol.clone());
    }
    glyphs.sort();
    glyphs.dedup();
    assert_eq!(glyphs.len(), 9);
}

#[test]
fn numbers_outside_one_to_nine_get_the_universal_symbol() {
    for n in [0, 10, 11, 22, 33, -9, i32::MAX] {
        let symbol = get_numerology_symbol(n);
        assert_eq!(symbol.symbol, "✨");
        assert_eq!(symbol.planet, "Cosmic");
        assert_eq!(symbol.element, Element::Universal);
    }
}

// ── Scoring ──────────────────────────────────────────────────────────────

#[test]
fn seeded_scores_are_reproducible() {
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);
    let left: Vec<u8> = (0..20).map(|_| generate_compatibility_score_with(1, 5, &mut a)).collect();
    let right: Vec<u8> = (0..20).map(|_| generate_compatibility_score_with(5, 1, &mut b)).collect();
    assert_eq!(left, right);
}

#[test]
fn inclusive_sampling_reaches_both_ends_of_the_band() {
    let record = get_detailed_compatibility(3, 3);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let scores: Vec<u8> = (0..5_000)
        .map(|_| generate_compatibility_score_with(3, 3, &mut rng))
        .collect();
    assert!(scores.contains(&record.min_score));
    assert!(scores.contains(&record.max_score));
}

#[test]
fn half_open_sampling_never_reaches_max() {
    let record = get_detailed_compatibility(4, 8);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let scores: Vec<u8> = (0..5_000)
        .map(|_| sample_score(record, numen_core::ScoreRange::HalfOpen, &mut rng))
        .collect();
    assert!(scores.iter().all(|&s| s >= record.min_score && s < record.max_score));
    assert!(scores.contains(&record.min_score));
}

#[test]
fn thread_rng_scores_stay_in_band() {
    let record = get_detailed_compatibility(7, 8);
    for _ in 0..500 {
        assert!(record.contains(generate_compatibility_score(8, 7)));
    }
}

// ── Personal symbols ─────────────────────────────────────────────────────

#[test]
fn personal_symbols_for_ann() {
    // life path 6, destiny 11 -> 2, personality 1
    let symbols = calculate_personal_symbols("07/16/1990", "Ann").unwrap();
    assert_eq!(symbols.life_path_symbol, *get_numerology_symbol(6));
    assert_eq!(symbols.destiny_symbol, *get_numerology_symbol(2));
    assert_eq!(symbols.personality_symbol, *get_numerology_symbol(1));
}

#[test]
fn master_life_path_maps_to_reduced_symbol() {
    // 09/21/1909 -> 1939 -> 22 -> symbol of 4
    let symbols = calculate_personal_symbols("09/21/1909", "Kwame Nkrumah").unwrap();
    assert_eq!(symbols.life_path_symbol, *get_numerology_symbol(4));
}

#[test]
fn malformed_input_is_a_typed_error() {
    assert!(matches!(
        calculate_personal_symbols("1990/07/16/x", "Ann"),
        Err(NumerologyError::Input(_))
    ));
    assert!(matches!(
        calculate_personal_symbols("07/16/1990", "!!!"),
        Err(NumerologyError::Input(_))
    ));
}

#[test]
fn vowel_only_name_gets_universal_personality_symbol_only() {
    // life path 7 + 16 + 1990 = 2013 -> 6, destiny a+o+i = 1+6+9 = 16 -> 7
    let symbols = calculate_personal_symbols("07/16/1990", "Aoi").unwrap();
    assert_eq!(symbols.life_path_symbol, *get_numerology_symbol(6));
    assert_eq!(symbols.destiny_symbol, *get_numerology_symbol(7));
    assert!(symbols.personality_symbol.is_fallback());

    assert_eq!(calculate_personal_symbols_or_fallback("07/16/1990", "Aoi"), symbols);
}

#[test]
fn fallback_variant_replaces_only_the_bad_date_slot() {
    let symbols = calculate_personal_symbols_or_fallback("not a date", "Ann");
    assert!(symbols.life_path_symbol.is_fallback());
    assert_eq!(symbols.destiny_symbol, *get_numerology_symbol(2));
    assert_eq!(symbols.personality_symbol, *get_numerology_symbol(1));

    let good = calculate_personal_symbols_or_fallback("07/16/1990", "Ann");
    assert_eq!(good, calculate_personal_symbols("07/16/1990", "Ann").unwrap());
}

#[test]
fn fallback_variant_replaces_only_the_bad_name_slots() {
    let symbols = calculate_personal_symbols_or_fallback("07/16/1990", "!!!");
    assert_eq!(symbols.life_path_symbol, *get_numerology_symbol(6));
    assert!(symbols.destiny_symbol.is_fallback());
    assert!(symbols.personality_symbol.is_fallback());

    let both = calculate_personal_symbols_or_fallback("13/01/1990", "");
    assert!(both.life_path_symbol.is_fallback());
    assert!(both.destiny_symbol.is_fallback());
    assert!(both.personality_symbol.is_fallback());
}
