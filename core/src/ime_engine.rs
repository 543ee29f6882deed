//! IME engine: layout lookup, mode flag and composition in one entry point.
//!
//! `ImeEngine` is what hosts talk to. It resolves a `KeyEvent` through the
//! layout, then asks the composition step for an `Edit` against a borrowed
//! buffer snapshot. The only state it owns is the on/off mode flag, so a
//! single engine can serve any number of text fields.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::composition::compose;
use crate::edit::{Edit, PassthroughReason};
use crate::handler::KeyHandler;
use crate::input_buffer::TextBuffer;
use crate::keys::KeyEvent;
use crate::layout::{Layout, OutputUnit};
use crate::Config;

/// Whether the engine is transliterating or handing every key back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are mapped through the layout
    #[default]
    Active,
    /// Every key goes to the host untouched
    Passthrough,
}

/// Result of delivering a key event to a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the IME
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
}

/// IME engine over a keyboard layout.
///
/// # Example
///
/// ```rust,ignore
/// use libbangla_core::{ImeEngine, KeyEvent, BaseKey, TextBuffer};
///
/// let engine = ImeEngine::new(layout);
/// let mut buffer = TextBuffer::new();
/// let edit = engine.process_key(&buffer, &KeyEvent::new(BaseKey::J));
/// buffer.apply(&edit);
/// ```
pub struct ImeEngine<L> {
    layout: L,
    active: AtomicBool,
}

impl<L: Layout> ImeEngine<L> {
    /// Create an active engine over `layout`.
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            active: AtomicBool::new(true),
        }
    }

    /// Create an engine whose initial mode comes from `config`.
    pub fn with_config(layout: L, config: &Config) -> Self {
        let engine = Self::new(layout);
        if !config.start_active {
            engine.set_mode(InputMode::Passthrough);
        }
        engine
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn mode(&self) -> InputMode {
        if self.active.load(Ordering::Relaxed) {
            InputMode::Active
        } else {
            InputMode::Passthrough
        }
    }

    pub fn set_mode(&self, mode: InputMode) {
        self.active
            .store(mode == InputMode::Active, Ordering::Relaxed);
        tracing::debug!(layout = self.layout.name(), ?mode, "input mode set");
    }

    /// Flip between active and passthrough. Returns the new mode.
    pub fn toggle_mode(&self) -> InputMode {
        let was_active = self.active.fetch_xor(true, Ordering::Relaxed);
        let mode = if was_active {
            InputMode::Passthrough
        } else {
            InputMode::Active
        };
        tracing::debug!(layout = self.layout.name(), ?mode, "input mode toggled");
        mode
    }

    /// Resolve a key event through the layout, ignoring ctrl and mode.
    ///
    /// Keys outside the recognized set are `Unhandled` whatever the layout says.
    pub fn resolve(&self, event: &KeyEvent) -> OutputUnit {
        if !event.key.is_recognized() {
            return OutputUnit::Unhandled;
        }
        self.layout.resolve(event.key, event.shift)
    }

    /// Compute the edit for one keystroke against `buffer`.
    ///
    /// The buffer is only read; apply the returned edit to change it.
    pub fn process_key(&self, buffer: &TextBuffer, event: &KeyEvent) -> Edit {
        if self.mode() == InputMode::Passthrough {
            tracing::trace!(?event, "engine inactive, passing key through");
            return Edit::passthrough(PassthroughReason::Inactive);
        }

        // Resolved even when ctrl is held so the trace shows what the key maps to.
        let unit = self.resolve(event);
        tracing::trace!(?event, ?unit, cursor = buffer.cursor(), "resolved key");
        compose(&self.layout, buffer, unit, event.ctrl)
    }

    /// Process a key and return the updated buffer alongside the edit.
    pub fn process_snapshot(&self, buffer: &TextBuffer, event: &KeyEvent) -> (TextBuffer, Edit) {
        let edit = self.process_key(buffer, event);
        let mut next = buffer.clone();
        next.apply(&edit);
        (next, edit)
    }
}

impl<L: Layout + Send + Sync> KeyHandler for ImeEngine<L> {
    fn handle_key(&self, buffer: &TextBuffer, event: &KeyEvent) -> Edit {
        self.process_key(buffer, event)
    }
}
