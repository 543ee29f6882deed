//! Turning a resolved output unit into an edit on the host buffer.
//!
//! Literals are inserted at the cursor. Vowel signs look back one character
//! and replace it with whatever the layout's combination rules produce.

use crate::edit::{Edit, PassthroughReason};
use crate::input_buffer::TextBuffer;
use crate::layout::{Layout, OutputUnit};

/// Cursor advance after a lookback replacement, measured from the cursor
/// position before the edit. Kept at 2 even when the replacement is a single
/// composed character; hosts clamp the result.
pub const REPLACE_CURSOR_ADVANCE: usize = 2;

/// Compute the edit for `unit` against `buffer`.
///
/// `ctrl` short-circuits to passthrough so host shortcuts keep working. The
/// buffer is only read. A vowel sign with nothing before the cursor is
/// inserted like a literal and advances the cursor by its char count, so a
/// two-char conjunct sign advances by 2, not 1.
pub fn compose<L: Layout + ?Sized>(
    layout: &L,
    buffer: &TextBuffer,
    unit: OutputUnit,
    ctrl: bool,
) -> Edit {
    if ctrl {
        return Edit::passthrough(PassthroughReason::Modifier);
    }

    let cursor = buffer.cursor();
    match unit {
        OutputUnit::Unhandled => Edit::passthrough(PassthroughReason::Unmapped),
        OutputUnit::Literal(text) => Edit::Insert {
            at: cursor,
            text: text.to_string(),
            cursor: cursor + text.chars().count(),
        },
        OutputUnit::VowelSign(sign) => match buffer.char_before_cursor() {
            Some(prev) => {
                let combined = layout.combine(prev, sign);
                tracing::debug!(
                    layout = layout.name(),
                    %prev,
                    sign,
                    %combined,
                    composed = combined.chars().count() == 1,
                    "vowel sign lookback"
                );
                Edit::ReplaceRange {
                    start: cursor - 1,
                    end: cursor,
                    text: combined,
                    cursor: cursor + REPLACE_CURSOR_ADVANCE,
                }
            }
            None => Edit::Insert {
                at: cursor,
                text: sign.to_string(),
                cursor: cursor + sign.chars().count(),
            },
        },
    }
}
