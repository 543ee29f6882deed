//! libbangla-core
//!
//! Layout-agnostic input method plumbing shared by libbangla: key events and
//! their host adapters, the reference text buffer, edit instructions, the
//! lookback composition step, the engine with its on/off mode, and the
//! handler-attachment interface hosts use to wire the engine to a text field.
//!
//! Public API:
//! - `KeyEvent` / `BaseKey` - One keystroke and its normalization adapters
//! - `Layout` / `OutputUnit` - Key table and combination rules, per language
//! - `TextBuffer` - Text plus character-indexed cursor
//! - `Edit` - Single-splice edit instruction returned per keystroke
//! - `ImeEngine` - Layout + mode flag + composition
//! - `InputField` / `KeyHandler` / `TextTarget` - Attaching handlers to hosts
//! - `Config` - Configuration loaded from TOML
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;
pub use error::ImeError;

pub mod keys;
pub use keys::{BaseKey, KeyEvent};

pub mod layout;
pub use layout::{Layout, OutputUnit};

pub mod input_buffer;
pub use input_buffer::TextBuffer;

pub mod edit;
pub use edit::{Edit, PassthroughReason};

pub mod composition;
pub use composition::compose;

pub mod ime_engine;
pub use ime_engine::{ImeEngine, InputMode, KeyResult};

pub mod handler;
pub use handler::{InputField, KeyHandler, TextTarget};

/// Engine and host configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Start transliterating immediately (false starts in passthrough)
    pub start_active: bool,

    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_active: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ImeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ImeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ImeError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ImeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ImeError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, ImeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_for_missing_keys() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_toml_str("start_active = false").unwrap();
        assert!(!config.start_active);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_config_rejects_bad_types() {
        let err = Config::from_toml_str("start_active = \"yes\"").unwrap_err();
        assert!(matches!(err, ImeError::Config(_)));
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "libbangla_config_{}.toml",
            std::process::id()
        ));
        let config = Config {
            start_active: false,
            log_filter: "libbangla=debug".to_string(),
        };
        config.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_missing_file() {
        let err = Config::load_toml("/nonexistent/libbangla.toml").unwrap_err();
        assert!(matches!(err, ImeError::Io { .. }));
    }
}
