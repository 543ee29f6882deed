//! # libbangla
//!
//! Bangla phonetic-layout input method engine built on libbangla-core.
//!
//! ```rust
//! use std::sync::Arc;
//! use libbangla::{create_ime_engine, enable_bangla_typing, KeyEvent, TextBuffer};
//!
//! let engine = Arc::new(create_ime_engine());
//! let mut field = enable_bangla_typing(Some(TextBuffer::new()), engine).unwrap();
//! for ch in "jF".chars() {
//!     field.key_press(&KeyEvent::from_char(ch));
//! }
//! assert_eq!(field.target().text(), "কঅ");
//! ```

pub mod combine;
pub mod engine;
pub mod layout;

// Re-export the core plumbing
pub use libbangla_core::*;

pub use combine::{combine_vowel_sign, rule_count};
pub use engine::{
    create_ime_engine, create_ime_engine_with_config, enable_bangla_typing, BanglaEngine,
    HANDLER_NAME,
};
pub use layout::{BanglaLayout, VOWEL_SIGNS};
