// core/src/layout.rs
//
// Keyboard layout abstraction. A layout owns the static key table and the
// vowel-sign combination rules; the composition algorithm is generic over it.

use crate::keys::BaseKey;

/// What a single keystroke resolves to before it touches the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputUnit {
    /// Text inserted at the cursor as-is (characters, punctuation, space)
    Literal(&'static str),
    /// Dependent vowel sign; combines with the character before the cursor
    VowelSign(&'static str),
    /// Key not in the layout; the host handles it
    Unhandled,
}

impl OutputUnit {
    /// The text this unit would insert, if any.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Self::Literal(s) | Self::VowelSign(s) => Some(s),
            Self::Unhandled => None,
        }
    }
}

/// Trait that keyboard layouts implement to drive the composition engine.
///
/// Implementations must be pure: the same arguments always produce the same
/// result, and no state is kept between calls.
pub trait Layout {
    /// Short identifier used in logs (e.g. "bangla-phonetic").
    fn name(&self) -> &'static str;

    /// Map a base key and shift state to an output unit.
    fn resolve(&self, key: BaseKey, shift: bool) -> OutputUnit;

    /// Combine the character before the cursor with a vowel sign.
    ///
    /// Returns the replacement for `preceding`: either a composed character
    /// or `preceding` followed by `sign` when no rule applies.
    fn combine(&self, preceding: char, sign: &str) -> String;
}

