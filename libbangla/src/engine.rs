//! Bangla engine construction and text-field wiring.
//!
//! The engine itself lives in libbangla-core; this module fixes the layout and
//! offers the one-call attach that hosts use to turn Bangla typing on for a
//! text field.

use std::sync::Arc;

use libbangla_core::{Config, ImeEngine, ImeError, InputField, TextTarget};

use crate::layout::BanglaLayout;

/// Name the Bangla handler is registered under on an `InputField`.
pub const HANDLER_NAME: &str = "bangla";

/// IME engine over the Bangla layout.
pub type BanglaEngine = ImeEngine<BanglaLayout>;

/// Create an active Bangla engine.
pub fn create_ime_engine() -> BanglaEngine {
    ImeEngine::new(BanglaLayout::new())
}

/// Create a Bangla engine whose initial mode follows `config`.
pub fn create_ime_engine_with_config(config: &Config) -> BanglaEngine {
    ImeEngine::with_config(BanglaLayout::new(), config)
}

/// Enable Bangla typing on a host text target.
///
/// Wraps `target` in an `InputField` and attaches `engine` under
/// [`HANDLER_NAME`]. Detach it again with `field.detach(HANDLER_NAME)`.
/// Fails with `ImeError::InvalidTarget` if the target is absent or invalid.
pub fn enable_bangla_typing<T: TextTarget>(
    target: Option<T>,
    engine: Arc<BanglaEngine>,
) -> Result<InputField<T>, ImeError> {
    let mut field = InputField::new(target)?;
    field.attach(HANDLER_NAME, engine)?;
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libbangla_core::{InputMode, TextBuffer};

    #[test]
    fn test_factory_modes() {
        assert_eq!(create_ime_engine().mode(), InputMode::Active);

        let config = Config {
            start_active: false,
            ..Config::default()
        };
        assert_eq!(
            create_ime_engine_with_config(&config).mode(),
            InputMode::Passthrough
        );
    }

    #[test]
    fn test_enable_attaches_named_handler() {
        let engine = Arc::new(create_ime_engine());
        let field = enable_bangla_typing(Some(TextBuffer::new()), engine).unwrap();
        assert!(field.is_attached(HANDLER_NAME));
    }

    #[test]
    fn test_enable_rejects_absent_target() {
        let engine = Arc::new(create_ime_engine());
        let result = enable_bangla_typing::<TextBuffer>(None, engine);
        assert!(matches!(result, Err(ImeError::InvalidTarget)));
    }
}
