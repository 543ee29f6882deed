//! Error type for the library surface.
//!
//! Per-keystroke processing never fails; errors only come from attaching to
//! a text target, registering handlers, and loading configuration.

use std::path::PathBuf;

/// Errors returned by libbangla-core.
#[derive(Debug, thiserror::Error)]
pub enum ImeError {
    /// The text target is absent or no longer usable.
    #[error("text target is absent or invalid")]
    InvalidTarget,

    /// A key handler with this name is already attached.
    #[error("a key handler named '{0}' is already attached")]
    HandlerExists(String),

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("cannot serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Reading or writing a configuration file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
