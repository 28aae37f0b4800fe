//! Field state as seen by the widget.

use crate::selection::SelectionRange;
use crate::text::{char_len, char_to_byte};

/// A field value plus its caret / selection bounds, in char offsets.
///
/// Two flavours flow through the engine:
/// - *committed* states, whose `value` is always a full masked rendering of
///   the template and whose bounds lie within it;
/// - *candidate* states, produced by the edit resolvers and handed to the
///   interceptor hook before masking, whose `value` may be any raw text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    pub value: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl InputState {
    /// A state with a collapsed caret at `caret`.
    pub fn with_caret(value: impl Into<String>, caret: usize) -> Self {
        Self {
            value: value.into(),
            selection_start: caret,
            selection_end: caret,
        }
    }

    /// The caret position (start of the selection).
    #[inline]
    pub fn caret(&self) -> usize {
        self.selection_start
    }

    #[inline]
    pub fn selection(&self) -> SelectionRange {
        SelectionRange::new(self.selection_start, self.selection_end)
    }

    /// Selection bounds converted to byte offsets into `value`, for widgets
    /// that address text by byte.
    pub fn byte_selection(&self) -> SelectionRange {
        let sel = self.selection();
        SelectionRange::new(
            char_to_byte(&self.value, sel.start),
            char_to_byte(&self.value, sel.end),
        )
    }

    /// Value length in chars.
    #[inline]
    pub fn char_len(&self) -> usize {
        char_len(&self.value)
    }
}
