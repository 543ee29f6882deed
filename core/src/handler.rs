//! Attaching key handlers to host text fields.
//!
//! A host wraps its widget in a `TextTarget` and hands it to an `InputField`.
//! Key handlers (usually an `ImeEngine`) are registered on the field by name
//! and can be detached again, after which the field falls back to the host's
//! own key handling. Nothing replaces the widget's methods; the field simply
//! routes each key press.

use std::sync::Arc;

use crate::edit::Edit;
use crate::error::ImeError;
use crate::ime_engine::KeyResult;
use crate::input_buffer::TextBuffer;
use crate::keys::KeyEvent;

/// Something that turns a key press into an edit on a buffer snapshot.
pub trait KeyHandler: Send + Sync {
    /// Decide what `event` does to `buffer`. Must not retain `buffer`.
    fn handle_key(&self, buffer: &TextBuffer, event: &KeyEvent) -> Edit;
}

/// Host-side text widget abstraction.
pub trait TextTarget {
    /// Whether the underlying widget still exists.
    fn is_valid(&self) -> bool {
        true
    }

    /// Current text and cursor.
    fn snapshot(&self) -> TextBuffer;

    /// Apply an edit as a single undoable change.
    fn apply_edit(&mut self, edit: &Edit);

    /// The host's default handling for keys the handlers pass on.
    fn default_key(&mut self, event: &KeyEvent);
}

/// `TextBuffer` behaves like a plain single-line text field.
impl TextTarget for TextBuffer {
    fn snapshot(&self) -> TextBuffer {
        self.clone()
    }

    fn apply_edit(&mut self, edit: &Edit) {
        self.apply(edit);
    }

    fn default_key(&mut self, event: &KeyEvent) {
        if let Some(ch) = event.ascii_char() {
            let mut tmp = [0u8; 4];
            self.insert_str(ch.encode_utf8(&mut tmp));
        }
    }
}

/// A text target with named key handlers attached.
pub struct InputField<T> {
    target: T,
    handlers: Vec<(String, Arc<dyn KeyHandler>)>,
    last_edit: Option<Edit>,
}

impl<T: TextTarget> InputField<T> {
    /// Wrap a host target. Fails with `InvalidTarget` when the target is
    /// absent or reports itself invalid.
    pub fn new(target: Option<T>) -> Result<Self, ImeError> {
        let target = target.ok_or(ImeError::InvalidTarget)?;
        if !target.is_valid() {
            return Err(ImeError::InvalidTarget);
        }
        Ok(Self {
            target,
            handlers: Vec::new(),
            last_edit: None,
        })
    }

    /// Register a handler under `name`. Handlers are consulted in attach order.
    pub fn attach(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn KeyHandler>,
    ) -> Result<(), ImeError> {
        let name = name.into();
        if self.is_attached(&name) {
            return Err(ImeError::HandlerExists(name));
        }
        tracing::debug!(handler = %name, "attached key handler");
        self.handlers.push((name, handler));
        Ok(())
    }

    /// Remove the handler registered under `name` and return it.
    pub fn detach(&mut self, name: &str) -> Option<Arc<dyn KeyHandler>> {
        let idx = self.handlers.iter().position(|(n, _)| n == name)?;
        tracing::debug!(handler = %name, "detached key handler");
        Some(self.handlers.remove(idx).1)
    }

    pub fn is_attached(&self, name: &str) -> bool {
        self.handlers.iter().any(|(n, _)| n == name)
    }

    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.iter().map(|(n, _)| n.as_str())
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// The edit produced by the most recent key press, if any handler ran.
    pub fn last_edit(&self) -> Option<&Edit> {
        self.last_edit.as_ref()
    }

    /// Deliver a key press.
    ///
    /// The first handler that does not pass the key through wins and its edit
    /// is applied. If every handler passes (or none is attached) the target's
    /// default handling runs and `NotHandled` is returned.
    pub fn key_press(&mut self, event: &KeyEvent) -> KeyResult {
        self.last_edit = None;
        if !self.target.is_valid() {
            tracing::warn!(?event, "key press on invalid text target ignored");
            return KeyResult::NotHandled;
        }

        let snapshot = self.target.snapshot();
        for (name, handler) in &self.handlers {
            let edit = handler.handle_key(&snapshot, event);
            let passthrough = edit.is_passthrough();
            self.last_edit = Some(edit);
            if !passthrough {
                tracing::trace!(handler = %name, ?event, "key handled");
                break;
            }
        }

        match &self.last_edit {
            Some(edit) if !edit.is_passthrough() => {
                self.target.apply_edit(edit);
                KeyResult::Handled
            }
            _ => {
                self.target.default_key(event);
                KeyResult::NotHandled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::PassthroughReason;
    use crate::keys::BaseKey;

    /// Inserts "x" for every key.
    struct Always;

    impl KeyHandler for Always {
        fn handle_key(&self, buffer: &TextBuffer, _event: &KeyEvent) -> Edit {
            Edit::Insert {
                at: buffer.cursor(),
                text: "x".to_string(),
                cursor: buffer.cursor() + 1,
            }
        }
    }

    struct Never;

    impl KeyHandler for Never {
        fn handle_key(&self, _buffer: &TextBuffer, _event: &KeyEvent) -> Edit {
            Edit::passthrough(PassthroughReason::Unmapped)
        }
    }

    struct Destroyed;

    impl TextTarget for Destroyed {
        fn is_valid(&self) -> bool {
            false
        }
        fn snapshot(&self) -> TextBuffer {
            TextBuffer::new()
        }
        fn apply_edit(&mut self, _edit: &Edit) {}
        fn default_key(&mut self, _event: &KeyEvent) {}
    }

    #[test]
    fn test_absent_target_is_rejected() {
        assert!(matches!(
            InputField::<TextBuffer>::new(None),
            Err(ImeError::InvalidTarget)
        ));
        assert!(matches!(
            InputField::new(Some(Destroyed)),
            Err(ImeError::InvalidTarget)
        ));
    }

    #[test]
    fn test_no_handler_uses_default() {
        let mut field = InputField::new(Some(TextBuffer::new())).unwrap();
        let result = field.key_press(&KeyEvent::from_char('k'));
        assert_eq!(result, KeyResult::NotHandled);
        assert_eq!(field.target().text(), "k");
        assert!(field.last_edit().is_none());
    }

    #[test]
    fn test_attach_detach() {
        let mut field = InputField::new(Some(TextBuffer::new())).unwrap();
        field.attach("always", Arc::new(Always)).unwrap();
        assert!(field.is_attached("always"));
        assert!(matches!(
            field.attach("always", Arc::new(Never)),
            Err(ImeError::HandlerExists(name)) if name == "always"
        ));

        assert_eq!(field.key_press(&KeyEvent::from_char('k')), KeyResult::Handled);
        assert_eq!(field.target().text(), "x");

        assert!(field.detach("always").is_some());
        assert!(field.detach("always").is_none());
        field.key_press(&KeyEvent::from_char('k'));
        assert_eq!(field.target().text(), "xk");
    }

    #[test]
    fn test_handlers_consulted_in_order() {
        let mut field = InputField::new(Some(TextBuffer::new())).unwrap();
        field.attach("never", Arc::new(Never)).unwrap();
        field.attach("always", Arc::new(Always)).unwrap();
        let names: Vec<_> = field.handler_names().collect();
        assert_eq!(names, ["never", "always"]);

        assert_eq!(field.key_press(&KeyEvent::new(BaseKey::J)), KeyResult::Handled);
        assert_eq!(field.into_target().text(), "x");
    }

    #[test]
    fn test_all_passthrough_falls_back() {
        let mut field = InputField::new(Some(TextBuffer::new())).unwrap();
        field.attach("never", Arc::new(Never)).unwrap();
        assert_eq!(field.key_press(&KeyEvent::from_char('J')), KeyResult::NotHandled);
        assert_eq!(field.target().text(), "J");
        assert!(field.last_edit().unwrap().is_passthrough());
    }
}
