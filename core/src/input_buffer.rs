//! Reference text buffer with cursor tracking.
//!
//! `TextBuffer` models the host's single-line text field: a string plus a
//! cursor measured in characters (code points), not bytes. The engine reads a
//! borrowed snapshot of it and answers with an `Edit`; hosts that have no
//! buffer of their own can use this one and call `apply`.

use crate::edit::Edit;

/// Text plus a cursor in `0..=len` (character index).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Buffer holding `text` with the cursor at `cursor`, clamped to the length.
    pub fn with_cursor(text: impl Into<String>, cursor: usize) -> Self {
        let mut buffer = Self::from_text(text);
        buffer.set_cursor(cursor);
        buffer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clear the buffer and reset cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// The character immediately before the cursor.
    pub fn char_before_cursor(&self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        self.text.chars().nth(self.cursor - 1)
    }

    /// Insert a string at the cursor and move the cursor past it.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Set the cursor, clamping to the buffer length.
    /// Returns false if the requested position had to be clamped.
    pub fn set_cursor(&mut self, pos: usize) -> bool {
        let len = self.len();
        self.cursor = pos.min(len);
        pos <= len
    }

    /// Apply an edit instruction. Returns true if the text changed.
    ///
    /// The edit's cursor is clamped to the new length, the way a text widget
    /// treats an out-of-range cursor request. Ranges beyond the text are
    /// clamped too, so a stale edit can never panic.
    pub fn apply(&mut self, edit: &Edit) -> bool {
        let Some((start, end, replacement)) = edit.splice() else {
            return false;
        };
        let len = self.len();
        let end = end.min(len);
        let start = start.min(end);
        let from = self.byte_offset(start);
        let to = self.byte_offset(end);
        let changed = self.text[from..to] != *replacement;
        self.text.replace_range(from..to, replacement);
        if let Some(cursor) = edit.new_cursor() {
            self.set_cursor(cursor);
        }
        changed
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
