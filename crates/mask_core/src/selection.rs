//! Caret / selection range representation.

/// A selection as a char range into a field value.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// range (`start == end`) is a plain caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionRange {
    /// Start char offset of the selection (inclusive).
    pub start: usize,
    /// End char offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed range at `pos`.
    #[inline]
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends to `max`.
    #[inline]
    pub fn clamp_to(self, max: usize) -> Self {
        Self::new(self.start.min(max), self.end.min(max))
    }
}
