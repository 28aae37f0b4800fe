//! Mask templates: literal characters interleaved with placeholder slots.
//!
//! All caret arithmetic in the engine is done in *slot ordinals* (the index of
//! a slot among all slots, left to right) and mapped back to template
//! positions through the helpers here, so literals never shift the math.

use crate::error::MaskError;
use crate::selection::SelectionRange;
use crate::significant::SignificantSequence;
use crate::text::is_significant;

/// Placeholder used when none is configured.
pub const DEFAULT_PLACEHOLDER: char = '_';

/// An immutable, validated mask template.
///
/// # Example
///
/// ```
/// use mask_core::{Mask, SignificantSequence};
///
/// let mask = Mask::new("+7 (___) ___-__-__", '_').unwrap();
/// assert_eq!(mask.slot_count(), 10);
/// assert_eq!(mask.prefix(), "+7 (");
///
/// let seq = SignificantSequence::from_raw("9008005544");
/// assert_eq!(mask.apply(&seq), "+7 (900) 800-55-44");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    template: Vec<char>,
    placeholder: char,
    /// Template positions of every slot, ascending.
    slots: Vec<usize>,
    prefix: String,
}

impl Mask {
    /// Build a mask from a template and its placeholder character.
    ///
    /// Fails when the placeholder never occurs in the template or is itself
    /// a significant character.
    pub fn new(template: &str, placeholder: char) -> Result<Self, MaskError> {
        if is_significant(placeholder) {
            return Err(MaskError::SignificantPlaceholder { placeholder });
        }

        let template: Vec<char> = template.chars().collect();
        let slots: Vec<usize> = template
            .iter()
            .enumerate()
            .filter(|(_, ch)| **ch == placeholder)
            .map(|(pos, _)| pos)
            .collect();

        let Some(&first) = slots.first() else {
            return Err(MaskError::InvalidMask {
                template: template.iter().collect(),
                placeholder,
            });
        };
        let prefix = template[..first].iter().collect();

        Ok(Self {
            template,
            placeholder,
            slots,
            prefix,
        })
    }

    /// Template length in chars; every committed value has exactly this length.
    #[inline]
    pub fn len(&self) -> usize {
        self.template.len()
    }

    /// Always `false`: a valid mask holds at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    #[inline]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn template(&self) -> String {
        self.template.iter().collect()
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Template positions of every slot, ascending.
    #[inline]
    pub fn slot_positions(&self) -> &[usize] {
        &self.slots
    }

    /// Literal text before the first slot.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Position of the first slot; the default caret for a focused field.
    #[inline]
    pub fn first_slot_position(&self) -> usize {
        self.slots[0]
    }

    #[inline]
    pub fn is_slot(&self, pos: usize) -> bool {
        self.slots.binary_search(&pos).is_ok()
    }

    /// Template position of the slot with the given ordinal.
    #[inline]
    pub fn slot_position(&self, ordinal: usize) -> Option<usize> {
        self.slots.get(ordinal).copied()
    }

    /// Ordinal of the first slot whose position is `>= pos`.
    pub fn slot_at_or_after(&self, pos: usize) -> Option<usize> {
        let ordinal = self.slots.partition_point(|&slot| slot < pos);
        (ordinal < self.slots.len()).then_some(ordinal)
    }

    /// Number of slots whose position lies inside `range`.
    pub fn slots_in(&self, range: SelectionRange) -> usize {
        let lo = self.slots.partition_point(|&slot| slot < range.start);
        let hi = self.slots.partition_point(|&slot| slot < range.end);
        hi.saturating_sub(lo)
    }

    /// Position of the first slot at or after `pos`, or the template length
    /// when every slot lies before `pos`.
    pub fn caret_at_or_after(&self, pos: usize) -> usize {
        self.slot_at_or_after(pos)
            .and_then(|ordinal| self.slot_position(ordinal))
            .unwrap_or(self.len())
    }

    /// Render `seq` into the template.
    ///
    /// Slots are filled left to right; unused slots keep the placeholder and
    /// characters beyond the slot count are dropped. The result always has
    /// exactly [`len`](Self::len) chars.
    pub fn apply(&self, seq: &SignificantSequence) -> String {
        let mut digits = seq.as_slice().iter().copied();
        let mut out = String::with_capacity(self.template.len());
        for &ch in &self.template {
            if ch != self.placeholder {
                out.push(ch);
                continue;
            }
            out.push(digits.next().unwrap_or(self.placeholder));
        }
        out
    }

    /// Reduce a raw field value to its significant characters.
    ///
    /// A leading copy of the literal prefix is dropped first, so callers may
    /// hand over the full display string. Values that already conform to the
    /// template are read slot by slot, which keeps digits that appear in
    /// literals from leaking into the sequence.
    pub fn extract(&self, raw: &str) -> SignificantSequence {
        if let Some(seq) = self.read_slots(raw) {
            return seq;
        }
        let rest = raw.strip_prefix(self.prefix.as_str()).unwrap_or(raw);
        SignificantSequence::from_raw(rest)
    }

    /// The rendering of an empty sequence.
    pub fn blank(&self) -> String {
        self.template()
    }

    /// Slot contents of a value shaped exactly like this template, or `None`
    /// when `raw` is not such a value.
    fn read_slots(&self, raw: &str) -> Option<SignificantSequence> {
        let mut seq = SignificantSequence::new();
        let mut chars = raw.chars();
        for &expected in &self.template {
            let ch = chars.next()?;
            if expected != self.placeholder {
                if ch != expected {
                    return None;
                }
                continue;
            }
            if is_significant(ch) {
                seq.push(ch);
            } else if ch != self.placeholder {
                return None;
            }
        }
        chars.next().is_none().then_some(seq)
    }
}
