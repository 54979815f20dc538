//! Pythagorean letter values.
//!
//! ```text
//! 1 2 3 4 5 6 7 8 9
//! a b c d e f g h i
//! j k l m n o p q r
//! s t u v w x y z
//! ```

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Value of an ASCII letter (case-insensitive). `None` for anything else,
/// including non-ASCII letters, which names are stripped of.
pub fn pythagorean_value(c: char) -> Option<u8> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let index = c.to_ascii_lowercase() as u8 - b'a';
    Some(index % 9 + 1)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// ASCII letter that is not a vowel. `y` counts as a consonant.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}
