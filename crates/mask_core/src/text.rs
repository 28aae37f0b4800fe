//! Character-level helpers shared by the extractor and integration layers.
//!
//! The engine addresses text by char offset (Unicode scalar values). Widgets
//! that keep byte carets can convert with [`char_to_byte`] and [`byte_to_char`].

use std::borrow::Cow;

/// Returns `true` if `ch` may occupy a placeholder slot.
///
/// Only ASCII digits are significant.
#[inline]
pub fn is_significant(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Strip every non-significant character from `s`, preserving order.
///
/// Returns a `Cow::Borrowed` if `s` is already all digits (fast path).
///
/// # Examples
///
/// ```
/// use mask_core::filter_significant;
///
/// assert_eq!(filter_significant("123"), "123");
/// assert_eq!(filter_significant("+7 (900) 800"), "7900800");
/// assert_eq!(filter_significant("abc"), "");
/// ```
pub fn filter_significant(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_significant) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| is_significant(*c)).collect())
}

/// Number of chars in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use mask_core::clamp_to_char_boundary;
///
/// let s = "№_"; // '№' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0);
/// assert_eq!(clamp_to_char_boundary(s, 2), 0);
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 100), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Convert a char offset into a byte offset, clamping past-the-end offsets to `s.len()`.
///
/// # Examples
///
/// ```
/// use mask_core::char_to_byte;
///
/// let s = "№ 1_";
/// assert_eq!(char_to_byte(s, 0), 0);
/// assert_eq!(char_to_byte(s, 1), 3);
/// assert_eq!(char_to_byte(s, 4), s.len());
/// assert_eq!(char_to_byte(s, 9), s.len());
/// ```
pub fn char_to_byte(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Convert a byte offset into a char offset.
///
/// Offsets inside a multi-byte character snap back to that character.
///
/// # Examples
///
/// ```
/// use mask_core::byte_to_char;
///
/// let s = "№ 1_";
/// assert_eq!(byte_to_char(s, 0), 0);
/// assert_eq!(byte_to_char(s, 2), 0);
/// assert_eq!(byte_to_char(s, 3), 1);
/// assert_eq!(byte_to_char(s, 100), 4);
/// ```
pub fn byte_to_char(s: &str, byte_index: usize) -> usize {
    let byte_index = clamp_to_char_boundary(s, byte_index);
    s[..byte_index].chars().count()
}
