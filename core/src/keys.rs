//! Key events and the adapters that normalize host key codes into them.
//!
//! The engine only sees `KeyEvent`. Hosts convert whatever their toolkit
//! delivers (key names, Qt key codes, typed characters) at the boundary.

use phf::phf_map;

/// Physical keys the layouts know about.
///
/// The 26 letters, the double-quote key and space are recognized. Anything
/// else is carried as `Other` with the host's raw code so it can be passed
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKey {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    /// The `"` / `'` key
    QuoteDbl,
    Space,
    /// Unrecognized key, raw host code
    Other(u32),
}

/// Key names accepted by `BaseKey::from_name` (lowercase).
static KEY_NAMES: phf::Map<&'static str, BaseKey> = phf_map! {
    "a" => BaseKey::A,
    "b" => BaseKey::B,
    "c" => BaseKey::C,
    "d" => BaseKey::D,
    "e" => BaseKey::E,
    "f" => BaseKey::F,
    "g" => BaseKey::G,
    "h" => BaseKey::H,
    "i" => BaseKey::I,
    "j" => BaseKey::J,
    "k" => BaseKey::K,
    "l" => BaseKey::L,
    "m" => BaseKey::M,
    "n" => BaseKey::N,
    "o" => BaseKey::O,
    "p" => BaseKey::P,
    "q" => BaseKey::Q,
    "r" => BaseKey::R,
    "s" => BaseKey::S,
    "t" => BaseKey::T,
    "u" => BaseKey::U,
    "v" => BaseKey::V,
    "w" => BaseKey::W,
    "x" => BaseKey::X,
    "y" => BaseKey::Y,
    "z" => BaseKey::Z,
    "quotedbl" => BaseKey::QuoteDbl,
    "quote" => BaseKey::QuoteDbl,
    "apostrophe" => BaseKey::QuoteDbl,
    "space" => BaseKey::Space,
};

impl BaseKey {
    /// Letter keys in alphabetical order.
    pub const LETTERS: [BaseKey; 26] = [
        BaseKey::A,
        BaseKey::B,
        BaseKey::C,
        BaseKey::D,
        BaseKey::E,
        BaseKey::F,
        BaseKey::G,
        BaseKey::H,
        BaseKey::I,
        BaseKey::J,
        BaseKey::K,
        BaseKey::L,
        BaseKey::M,
        BaseKey::N,
        BaseKey::O,
        BaseKey::P,
        BaseKey::Q,
        BaseKey::R,
        BaseKey::S,
        BaseKey::T,
        BaseKey::U,
        BaseKey::V,
        BaseKey::W,
        BaseKey::X,
        BaseKey::Y,
        BaseKey::Z,
    ];

    /// Look up a key by name, case-insensitively (`"q"`, `"Space"`, `"QuoteDbl"`).
    ///
    /// Also accepts Qt-style names with a `Key_` prefix.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("key_").unwrap_or(&lower);
        KEY_NAMES.get(bare).copied()
    }

    /// Normalize a Qt key code (`Qt::Key_A` .. `Qt::Key_Z`, `Key_QuoteDbl`, `Key_Space`).
    pub fn from_qt_code(code: u32) -> Self {
        match code {
            0x41..=0x5A => Self::LETTERS[(code - 0x41) as usize],
            0x22 => Self::QuoteDbl,
            0x20 => Self::Space,
            other => Self::Other(other),
        }
    }

    /// Whether this is one of the 28 keys layouts can map.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// One keystroke as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: BaseKey,
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyEvent {
    /// Unmodified key press.
    pub fn new(key: BaseKey) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
        }
    }

    /// Key press with shift held.
    pub fn shifted(key: BaseKey) -> Self {
        Self {
            key,
            shift: true,
            ctrl: false,
        }
    }

    /// Key press with explicit modifier state.
    pub fn with_modifiers(key: BaseKey, shift: bool, ctrl: bool) -> Self {
        Self { key, shift, ctrl }
    }

    /// Interpret a typed ASCII character as the keystroke that produces it
    /// on a US keyboard.
    ///
    /// Uppercase letters and `"` imply shift. Characters outside the
    /// recognized set become `BaseKey::Other` carrying the code point.
    pub fn from_char(ch: char) -> Self {
        match ch {
            'a'..='z' => Self::new(BaseKey::LETTERS[(ch as u8 - b'a') as usize]),
            'A'..='Z' => Self::shifted(BaseKey::LETTERS[(ch as u8 - b'A') as usize]),
            '\'' => Self::new(BaseKey::QuoteDbl),
            '"' => Self::shifted(BaseKey::QuoteDbl),
            ' ' => Self::new(BaseKey::Space),
            other => Self::new(BaseKey::Other(other as u32)),
        }
    }

    /// The character a plain text field would insert for this keystroke.
    ///
    /// Inverse of `from_char`. `None` when ctrl is held or the key has no
    /// printable character.
    pub fn ascii_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }
        match self.key {
            BaseKey::Space => Some(' '),
            BaseKey::QuoteDbl => Some(if self.shift { '"' } else { '\'' }),
            BaseKey::Other(code) => char::from_u32(code).filter(|c| !c.is_control()),
            letter => {
                let idx = BaseKey::LETTERS.iter().position(|k| *k == letter)?;
                let base = if self.shift { b'A' } else { b'a' };
                Some((base + idx as u8) as char)
            }
        }
    }
}
