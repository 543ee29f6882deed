//! Key table tests for the Bangla layout.
//!
//! Expected outputs are written as code point escapes so visually similar
//! characters cannot be confused.

use std::collections::HashSet;

use libbangla::{BanglaLayout, BaseKey, Layout, OutputUnit};

use libbangla::OutputUnit::{Literal as L, VowelSign as V};

/// (key, unshifted, shifted) for every letter.
const TABLE: [(BaseKey, OutputUnit, OutputUnit); 26] = [
    (BaseKey::A, V("\u{09C3}"), L("\u{09B0}\u{09CD}")),
    (BaseKey::B, L("\u{09A8}"), L("\u{09A3}")),
    (BaseKey::C, V("\u{09C7}"), V("\u{09C8}")),
    (BaseKey::D, V("\u{09BF}"), V("\u{09C0}")),
    (BaseKey::E, L("\u{09A1}"), L("\u{09A2}")),
    (BaseKey::F, V("\u{09BE}"), L("\u{0985}")),
    (BaseKey::G, L("\u{09CD}"), L("\u{0964}")),
    (BaseKey::H, L("\u{09AC}"), L("\u{09AD}")),
    (BaseKey::I, L("\u{09B9}"), L("\u{099E}")),
    (BaseKey::J, L("\u{0995}"), L("\u{0996}")),
    (BaseKey::K, L("\u{09A4}"), L("\u{09A5}")),
    (BaseKey::L, L("\u{09A6}"), L("\u{09A7}")),
    (BaseKey::M, L("\u{09AE}"), L("\u{09B6}")),
    (BaseKey::N, L("\u{09B8}"), L("\u{09B7}")),
    (BaseKey::O, L("\u{0997}"), L("\u{0998}")),
    (BaseKey::P, L("\u{09DC}"), L("\u{09DD}")),
    (BaseKey::Q, L("\u{0999}"), L("\u{0982}")),
    (BaseKey::R, L("\u{09AA}"), L("\u{09AB}")),
    (BaseKey::S, V("\u{09C1}"), V("\u{09C2}")),
    (BaseKey::T, L("\u{099F}"), L("\u{09A0}")),
    (BaseKey::U, L("\u{099C}"), L("\u{099D}")),
    (BaseKey::V, L("\u{09B0}"), L("\u{09B2}")),
    (BaseKey::W, L("\u{09AF}"), L("\u{09DF}")),
    (BaseKey::X, L("\u{0993}"), L("\u{09D7}")),
    (BaseKey::Y, L("\u{099A}"), L("\u{099B}")),
    (BaseKey::Z, V("\u{09CD}\u{09B0}"), V("\u{09CD}\u{09AF}")),
];

#[test]
fn test_all_letter_cells() {
    let layout = BanglaLayout::new();
    for (key, plain, shifted) in TABLE {
        assert_eq!(layout.resolve(key, false), plain, "{:?} unshifted", key);
        assert_eq!(layout.resolve(key, true), shifted, "{:?} shifted", key);
    }
}

#[test]
fn test_table_covers_every_letter() {
    let keys: HashSet<BaseKey> = TABLE.iter().map(|(k, _, _)| *k).collect();
    let letters: HashSet<BaseKey> = BaseKey::LETTERS.iter().copied().collect();
    assert_eq!(keys, letters);
}

#[test]
fn test_cells_are_distinct_and_non_empty() {
    let layout = BanglaLayout::new();
    let mut seen = HashSet::new();
    for key in BaseKey::LETTERS {
        for shift in [false, true] {
            let text = layout
                .resolve(key, shift)
                .text()
                .unwrap_or_else(|| panic!("{:?} shift={} unmapped", key, shift));
            assert!(!text.is_empty());
            assert!(seen.insert(text), "{:?} shift={} duplicates {}", key, shift, text);
        }
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn test_space_ignores_shift() {
    let layout = BanglaLayout::new();
    assert_eq!(layout.resolve(BaseKey::Space, false), L(" "));
    assert_eq!(layout.resolve(BaseKey::Space, true), L(" "));
}

#[test]
fn test_quote_key() {
    let layout = BanglaLayout::new();
    assert_eq!(layout.resolve(BaseKey::QuoteDbl, true), L("\u{201D}"));
    assert_eq!(layout.resolve(BaseKey::QuoteDbl, false), L("\u{2019}"));
}

#[test]
fn test_unrecognized_keys_unhandled() {
    let layout = BanglaLayout::new();
    for code in [0x30, 0x31, 0x2C, 0x2E, 0x0100_0004, 0x0100_0003] {
        assert_eq!(layout.resolve(BaseKey::Other(code), false), OutputUnit::Unhandled);
        assert_eq!(layout.resolve(BaseKey::Other(code), true), OutputUnit::Unhandled);
    }
}

#[test]
fn test_resolve_is_idempotent() {
    let layout = BanglaLayout::new();
    let keys = BaseKey::LETTERS
        .iter()
        .copied()
        .chain([BaseKey::QuoteDbl, BaseKey::Space, BaseKey::Other(0x31)]);
    for key in keys {
        for shift in [false, true] {
            let first = layout.resolve(key, shift);
            for _ in 0..3 {
                assert_eq!(layout.resolve(key, shift), first);
            }
        }
    }
}

#[test]
fn test_qt_codes_reach_the_table() {
    let layout = BanglaLayout::new();
    // Qt::Key_F, Qt::Key_QuoteDbl, Qt::Key_Space
    assert_eq!(layout.resolve(BaseKey::from_qt_code(0x46), false), V("\u{09BE}"));
    assert_eq!(layout.resolve(BaseKey::from_qt_code(0x22), true), L("\u{201D}"));
    assert_eq!(layout.resolve(BaseKey::from_qt_code(0x20), true), L(" "));
}
