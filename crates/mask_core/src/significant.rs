//! The ordered run of significant characters a user has entered.

use crate::text::is_significant;
use std::fmt;

/// Ordered significant characters, independent of where mask literals sit.
///
/// This is the model the masked string is rendered from. All edits are
/// expressed as operations on it; out-of-range indices are clamped or
/// ignored rather than panicking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignificantSequence {
    chars: Vec<char>,
}

impl SignificantSequence {
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Collect the significant characters of `s`, dropping everything else.
    pub fn from_raw(s: &str) -> Self {
        Self {
            chars: s.chars().filter(|c| is_significant(*c)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Remove the character at `index`. Returns `false` (and does nothing)
    /// when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.chars.len() {
            return false;
        }
        self.chars.remove(index);
        true
    }

    /// Remove up to `count` characters starting at `index`.
    ///
    /// Returns how many were actually removed.
    pub fn remove_range(&mut self, index: usize, count: usize) -> usize {
        let start = index.min(self.chars.len());
        let end = start.saturating_add(count).min(self.chars.len());
        self.chars.drain(start..end);
        end - start
    }

    /// Insert `other` at `index` (clamped to the current length).
    ///
    /// Returns the index the first inserted character actually landed at.
    pub fn splice(&mut self, index: usize, other: &SignificantSequence) -> usize {
        let at = index.min(self.chars.len());
        self.chars
            .splice(at..at, other.chars.iter().copied())
            .for_each(drop);
        at
    }
}

impl fmt::Display for SignificantSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl From<&str> for SignificantSequence {
    fn from(s: &str) -> Self {
        Self::from_raw(s)
    }
}
