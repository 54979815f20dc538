use numen_compat::*;
use numen_core::models::ScoreRange;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn arb_range() -> impl Strategy<Value = ScoreRange> {
    prop_oneof![Just(ScoreRange::Inclusive), Just(ScoreRange::HalfOpen)]
}

// ── Lookup symmetry over all integers ────────────────────────────────────

proptest! {
    #[test]
    fn lookup_is_symmetric(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(get_detailed_compatibility(a, b), get_detailed_compatibility(b, a));
    }

    #[test]
    fn every_lookup_has_a_valid_band(a in any::<i32>(), b in any::<i32>()) {
        prop_assert!(get_detailed_compatibility(a, b).has_valid_range());
    }

    #[test]
    fn out_of_range_symbols_fall_back(n in prop_oneof![i32::MIN..=0, 10..=i32::MAX]) {
        let symbol = get_numerology_symbol(n);
        prop_assert_eq!(symbol.symbol.as_str(), "✨");
        prop_assert_eq!(symbol.planet.as_str(), "Cosmic");
    }
}

// ── Sampled scores stay in band ──────────────────────────────────────────

proptest! {
    #[test]
    fn generated_scores_stay_in_band(a in 1i32..=9, b in 1i32..=9, seed in any::<u64>()) {
        let record = get_detailed_compatibility(a, b);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..200 {
            let score = generate_compatibility_score_with(a, b, &mut rng);
            prop_assert!(record.contains(score), "{} outside {}..={}", score, record.min_score, record.max_score);
        }
    }

    #[test]
    fn sampled_scores_respect_range_mode(
        a in 1i32..=9,
        b in 1i32..=9,
        range in arb_range(),
        seed in any::<u64>(),
    ) {
        let record = get_detailed_compatibility(a, b);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..100 {
            let score = sample_score(record, range, &mut rng);
            prop_assert!(score >= record.min_score);
            match range {
                ScoreRange::Inclusive => prop_assert!(score <= record.max_score),
                ScoreRange::HalfOpen => prop_assert!(score < record.max_score),
            }
        }
    }
}

// ── Personal symbols are always defined for valid input ──────────────────

proptest! {
    #[test]
    fn valid_input_never_yields_fallback_symbols(
        month in 1u32..=12,
        day in 1u32..=28,
        year in 1900u32..=2100,
        name in "[A-Za-z]{0,12}[b-df-hj-np-tv-z][A-Za-z ]{0,12}",
    ) {
        let date = format!("{month:02}/{day:02}/{year}");
        let symbols = calculate_personal_symbols(&date, &name).unwrap();
        prop_assert!(!symbols.life_path_symbol.is_fallback());
        prop_assert!(!symbols.destiny_symbol.is_fallback());
        prop_assert!(!symbols.personality_symbol.is_fallback());
    }
}

// ── Vowel-only names only lose the personality slot ──────────────────────

proptest! {
    #[test]
    fn vowel_only_name_only_falls_back_in_personality_slot(
        month in 1u32..=12,
        day in 1u32..=28,
        year in 1900u32..=2100,
        name in "[AEIOUaeiou]{1,8}( [aeiou]{1,8})?",
    ) {
        let date = format!("{month:02}/{day:02}/{year}");
        let symbols = calculate_personal_symbols(&date, &name).unwrap();
        prop_assert!(!symbols.life_path_symbol.is_fallback());
        prop_assert!(!symbols.destiny_symbol.is_fallback());
        prop_assert!(symbols.personality_symbol.is_fallback());
    }
}
