//! Bangla phonetic keyboard layout.
//!
//! Every letter key carries one Bangla character unshifted and another with
//! shift. Dependent vowel signs are flagged so the engine composes them with
//! the character before the cursor; everything else is inserted as typed.

use libbangla_core::{BaseKey, Layout, OutputUnit};

use crate::combine::combine_vowel_sign;

/// Dependent vowel signs that trigger lookback composition.
///
/// ো and ৌ have no key of their own. ৗ (au length mark, shift-X) is
/// deliberately absent and is inserted as a literal.
pub const VOWEL_SIGNS: [&str; 12] = [
    "\u{09BE}",         // া
    "\u{09BF}",         // ি
    "\u{09C0}",         // ী
    "\u{09C1}",         // ু
    "\u{09C2}",         // ূ
    "\u{09C7}",         // ে
    "\u{09C8}",         // ৈ
    "\u{09CB}",         // ো
    "\u{09CC}",         // ৌ
    "\u{09C3}",         // ৃ
    "\u{09CD}\u{09AF}", // ্য
    "\u{09CD}\u{09B0}", // ্র
];

/// The fixed Bangla layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BanglaLayout;

impl BanglaLayout {
    pub fn new() -> Self {
        Self
    }

    /// Raw table text for a key, before vowel-sign classification.
    pub fn key_text(key: BaseKey, shift: bool) -> Option<&'static str> {
        let (plain, shifted) = match key {
            BaseKey::Q => ("ঙ", "ং"),
            BaseKey::W => ("য", "\u{09DF}"),        // য়
            BaseKey::E => ("ড", "ঢ"),
            BaseKey::R => ("প", "ফ"),
            BaseKey::T => ("ট", "ঠ"),
            BaseKey::Y => ("চ", "ছ"),
            BaseKey::U => ("জ", "ঝ"),
            BaseKey::I => ("হ", "ঞ"),
            BaseKey::O => ("গ", "ঘ"),
            BaseKey::P => ("\u{09DC}", "\u{09DD}"), // ড়, ঢ়
            BaseKey::A => ("ৃ", "র্"),
            BaseKey::S => ("ু", "ূ"),
            BaseKey::D => ("ি", "ী"),
            BaseKey::F => ("া", "অ"),
            BaseKey::G => ("্", "।"),
            BaseKey::H => ("ব", "ভ"),
            BaseKey::J => ("ক", "খ"),
            BaseKey::K => ("ত", "থ"),
            BaseKey::L => ("দ", "ধ"),
            BaseKey::Z => ("্র", "্য"),
            BaseKey::X => ("ও", "ৗ"),
            BaseKey::C => ("ে", "ৈ"),
            BaseKey::V => ("র", "ল"),
            BaseKey::B => ("ন", "ণ"),
            BaseKey::N => ("স", "ষ"),
            BaseKey::M => ("ম", "শ"),
            BaseKey::QuoteDbl => ("\u{2019}", "\u{201D}"),
            BaseKey::Space => (" ", " "),
            BaseKey::Other(_) => return None,
        };
        Some(if shift { shifted } else { plain })
    }

    pub fn is_vowel_sign(text: &str) -> bool {
        VOWEL_SIGNS.contains(&text)
    }
}

impl Layout for BanglaLayout {
    fn name(&self) -> &'static str {
        "bangla"
    }

    fn resolve(&self, key: BaseKey, shift: bool) -> OutputUnit {
        match Self::key_text(key, shift) {
            Some(text) if Self::is_vowel_sign(text) => OutputUnit::VowelSign(text),
            Some(text) => OutputUnit::Literal(text),
            None => OutputUnit::Unhandled,
        }
    }

    fn combine(&self, preceding: char, sign: &str) -> String {
        combine_vowel_sign(preceding, sign)
    }
}
