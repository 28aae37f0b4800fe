//! Raw edits as reported by a widget.

use crate::selection::SelectionRange;

/// Which side of the caret a deletion removes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Backspace.
    Backward,
    /// Delete key.
    Forward,
}

/// One user edit, described in terms the widget already knows.
///
/// Carets and selections are char offsets into the field's value *before*
/// the edit, except for [`Edit::Insert`], where the widget has already merged
/// the typed text and reports the value and caret it ended up with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Text typed (or otherwise merged) by the widget's native input path.
    Insert { raw: String, caret: usize },
    /// Backspace / delete at a collapsed caret.
    Delete { direction: Direction, caret: usize },
    /// Clipboard text replacing `selection`.
    Paste {
        text: String,
        selection: SelectionRange,
    },
    /// Programmatic clear.
    Reset,
}

impl Edit {
    /// Short name used in logs and edit scripts.
    pub fn kind(&self) -> &'static str {
        match self {
            Edit::Insert { .. } => "type",
            Edit::Delete {
                direction: Direction::Backward,
                ..
            } => "backspace",
            Edit::Delete {
                direction: Direction::Forward,
                ..
            } => "delete",
            Edit::Paste { .. } => "paste",
            Edit::Reset => "reset",
        }
    }
}
