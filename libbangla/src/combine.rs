// libbangla/src/combine.rs
//
// Vowel-sign combination rules.
//
// When a dependent vowel sign is typed right after certain characters the
// pair collapses into an independent vowel: অ + া gives আ, and hasanta (্)
// followed by a sign gives the matching independent vowel. Any other pair is
// simply the preceding character followed by the sign.

use std::collections::HashMap;
use once_cell::sync::Lazy;

/// (preceding character, vowel sign) → composed text.
///
/// Matching is by exact code point; no normalization is applied.
static COMBINATIONS: Lazy<HashMap<(char, &'static str), &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(('\u{0985}', "\u{09BE}"), "\u{0986}"); // অ + া → আ

    // Hasanta + sign → independent vowel
    m.insert(('\u{09CD}', "\u{09BF}"), "\u{0987}"); // ই
    m.insert(('\u{09CD}', "\u{09C0}"), "\u{0988}"); // ঈ
    m.insert(('\u{09CD}', "\u{09C1}"), "\u{0989}"); // উ
    m.insert(('\u{09CD}', "\u{09C2}"), "\u{098A}"); // ঊ
    m.insert(('\u{09CD}', "\u{09C3}"), "\u{098B}"); // ঋ
    m.insert(('\u{09CD}', "\u{09C7}"), "\u{098F}"); // এ
    m.insert(('\u{09CD}', "\u{09C8}"), "\u{0990}"); // ঐ

    // ও + ো stays ও
    m.insert(('\u{0993}', "\u{09CB}"), "\u{0993}");
    m.insert(('\u{0993}', "\u{09D7}"), "\u{0994}"); // ও + ৗ → ঔ

    m
});

/// Combine `preceding` with `sign`, falling back to plain concatenation.
pub fn combine_vowel_sign(preceding: char, sign: &str) -> String {
    match COMBINATIONS.get(&(preceding, sign)) {
        Some(composed) => (*composed).to_string(),
        None => {
            let mut out = String::with_capacity(preceding.len_utf8() + sign.len());
            out.push(preceding);
            out.push_str(sign);
            out
        }
    }
}

/// Number of explicit combination rules.
pub fn rule_count() -> usize {
    COMBINATIONS.len()
}
