use std::num::NonZeroU64;

use numen_calc::*;
use numen_core::models::NumerologyNumber;
use proptest::prelude::*;

fn is_reduced(n: u32) -> bool {
    (1..=9).contains(&n) || [11, 22, 33].contains(&n)
}

// ── Reduction lands on a single digit or a master number ─────────────────

proptest! {
    #[test]
    fn reduction_is_single_digit_or_master(sum in 1u64..=u64::MAX / 2) {
        let n = NumerologyNumber::reduce(NonZeroU64::new(sum).unwrap());
        prop_assert!(is_reduced(n.value()), "{} reduced to {}", sum, n.value());
    }

    #[test]
    fn compatibility_safe_is_always_one_to_nine(sum in 1u64..1_000_000) {
        let n = NumerologyNumber::reduce(NonZeroU64::new(sum).unwrap());
        let safe = n.compatibility_safe();
        prop_assert!((1..=9).contains(&safe));
        if !n.is_master() {
            prop_assert_eq!(u32::from(safe), n.value());
        }
    }

    #[test]
    fn reduction_preserves_digital_root(sum in 1u64..1_000_000) {
        let n = NumerologyNumber::reduce(NonZeroU64::new(sum).unwrap());
        let root = match sum % 9 { 0 => 9, r => r };
        prop_assert_eq!(u64::from(n.compatibility_safe()), root);
    }
}

// ── Life path ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_valid_date_has_a_life_path(month in 1u32..=12, day in 1u32..=28, year in 1u32..=3000) {
        let date = format!("{month:02}/{day:02}/{year}");
        let n = life_path_number(&date).unwrap();
        prop_assert!(is_reduced(n.value()));

        let expected = NumerologyNumber::reduce(
            NonZeroU64::new(u64::from(month + day + year)).unwrap(),
        );
        prop_assert_eq!(n, expected);
        prop_assert_eq!(calculate_life_path_from_date(&date).unwrap(), expected.compatibility_safe());
    }

    #[test]
    fn zero_padding_does_not_change_life_path(month in 1u32..=12, day in 1u32..=28, year in 1000u32..=2999) {
        let padded = format!("{month:02}/{day:02}/{year}");
        let bare = format!("{month}/{day}/{year}");
        prop_assert_eq!(life_path_number(&padded).unwrap(), life_path_number(&bare).unwrap());
    }

    #[test]
    fn arbitrary_strings_never_panic(input in ".*") {
        let _ = life_path_number(&input);
        let _ = destiny_number(&input);
        let _ = personality_number(&input);
    }
}

// ── Name numbers ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn destiny_ignores_case_and_non_letters(name in "[a-z]{1,20}", noise in "[ .'0-9-]{0,5}") {
        let upper = name.to_ascii_uppercase();
        let noisy = format!("{noise}{upper}{noise}");
        prop_assert_eq!(destiny_number(&name).unwrap(), destiny_number(&noisy).unwrap());
    }

    #[test]
    fn vowels_do_not_move_personality(consonants in "[b-df-hj-np-tv-z]{1,12}", vowels in "[aeiou]{1,6}") {
        let with_vowels = format!("{vowels}{consonants}{vowels}");
        prop_assert_eq!(
            personality_number(&consonants).unwrap(),
            personality_number(&with_vowels).unwrap()
        );
    }

    #[test]
    fn safe_name_numbers_are_one_to_nine(name in "[A-Za-z ]{0,30}[b-df-hj-np-tv-z]") {
        prop_assert!((1..=9).contains(&calculate_destiny_number(&name).unwrap()));
        prop_assert!((1..=9).contains(&calculate_personality_number(&name).unwrap()));
    }
}
