//! Edit instructions returned to the host for each keystroke.
//!
//! Every instruction is a single splice of the host buffer plus a new cursor
//! position, so the host can apply it as one undoable step. Positions are
//! character (code point) indices.

use serde::Serialize;

/// Why a key was handed back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassthroughReason {
    /// The engine is switched off
    Inactive,
    /// Ctrl was held; shortcuts belong to the host
    Modifier,
    /// The key is not in the layout
    Unmapped,
}

/// Result of processing one keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Edit {
    /// Insert `text` at `at`, then move the cursor to `cursor`.
    Insert {
        at: usize,
        text: String,
        cursor: usize,
    },
    /// Replace `[start, end)` with `text`, then move the cursor to `cursor`.
    ///
    /// `cursor` may point past the end of the resulting buffer; hosts clamp.
    ReplaceRange {
        start: usize,
        end: usize,
        text: String,
        cursor: usize,
    },
    /// Run the host's default key handling; the buffer is not touched.
    Passthrough { reason: PassthroughReason },
}

impl Edit {
    pub fn passthrough(reason: PassthroughReason) -> Self {
        Self::Passthrough { reason }
    }

    /// Whether the host should run its own handling for this key.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough { .. })
    }

    /// Cursor requested by the edit, before any clamping.
    pub fn new_cursor(&self) -> Option<usize> {
        match self {
            Self::Insert { cursor, .. } | Self::ReplaceRange { cursor, .. } => Some(*cursor),
            Self::Passthrough { .. } => None,
        }
    }

    /// The replaced range and replacement text, if the edit mutates the buffer.
    ///
    /// An insert is reported as the empty range `[at, at)`.
    pub fn splice(&self) -> Option<(usize, usize, &str)> {
        match self {
            Self::Insert { at, text, .. } => Some((*at, *at, text)),
            Self::ReplaceRange {
                start, end, text, ..
            } => Some((*start, *end, text)),
            Self::Passthrough { .. } => None,
        }
    }
}
