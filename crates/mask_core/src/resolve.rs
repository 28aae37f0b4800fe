//! Edit resolvers: raw edit in, unmasked candidate state out.
//!
//! Every resolver reasons about the significant sequence and slot ordinals,
//! never about raw string offsets. The candidate's `value` is either the
//! widget's raw text (typing) or the bare significant characters (everything
//! else), possibly longer than the mask can show; masking happens on commit.

use crate::config::PasteSelection;
use crate::edit::{Direction, Edit};
use crate::mask::Mask;
use crate::selection::SelectionRange;
use crate::significant::SignificantSequence;
use crate::state::InputState;

/// Resolve `edit` against `current`, the value the field shows right now.
pub fn resolve(mask: &Mask, current: &str, edit: &Edit, policy: PasteSelection) -> InputState {
    match edit {
        Edit::Insert { raw, caret } => resolve_insert(mask, raw, *caret),
        Edit::Delete {
            direction: Direction::Backward,
            caret,
        } => resolve_backspace(mask, current, *caret),
        Edit::Delete {
            direction: Direction::Forward,
            caret,
        } => resolve_delete(mask, current, *caret),
        Edit::Paste { text, selection } => {
            resolve_paste(mask, current, text, *selection, policy)
        }
        Edit::Reset => resolve_reset(mask),
    }
}

/// The widget already merged the typed text; only the caret needs placing,
/// skipping forward over literals to the next fillable slot.
pub fn resolve_insert(mask: &Mask, raw: &str, raw_caret: usize) -> InputState {
    InputState::with_caret(raw, mask.caret_at_or_after(raw_caret))
}

/// Remove the entered character in the first slot at or after `caret - 1`.
/// The caret moves one position left.
///
/// Deleting "through" a literal consumes the digit in the next slot;
/// literals themselves are never removed. Caret 0 is a no-op.
pub fn resolve_backspace(mask: &Mask, current: &str, caret: usize) -> InputState {
    let caret = caret.min(mask.len());
    let mut seq = mask.extract(current);
    let Some(target) = caret.checked_sub(1) else {
        return candidate(&seq, 0);
    };
    if let Some(ordinal) = mask.slot_at_or_after(target) {
        seq.remove(ordinal);
    }
    candidate(&seq, target)
}

/// Remove the entered character in the first slot at or after the caret.
/// The caret does not move.
pub fn resolve_delete(mask: &Mask, current: &str, caret: usize) -> InputState {
    let caret = caret.min(mask.len());
    let mut seq = mask.extract(current);
    if let Some(ordinal) = mask.slot_at_or_after(caret) {
        seq.remove(ordinal);
    }
    candidate(&seq, caret)
}

/// Splice the significant characters of `text` into the sequence at the
/// slot under `selection.start`, replacing whatever the selection covered.
pub fn resolve_paste(
    mask: &Mask,
    current: &str,
    text: &str,
    selection: SelectionRange,
    policy: PasteSelection,
) -> InputState {
    let selection = selection.clamp_to(mask.len());
    let mut seq = mask.extract(current);
    let insert = mask
        .slot_at_or_after(selection.start)
        .unwrap_or(mask.slot_count());

    if !selection.is_empty() {
        let covered = match policy {
            PasteSelection::SlotsInRange => mask.slots_in(selection),
            PasteSelection::RawLength => selection.len(),
        };
        seq.remove_range(insert, covered);
    }

    let pasted = SignificantSequence::from_raw(text);
    // Entered characters pack to the left, so the paste lands at most at the
    // end of what is already there.
    let landed = seq.splice(insert, &pasted);

    let caret = match pasted.len() {
        0 => selection.start,
        n => match mask.slot_position(landed + n - 1) {
            Some(last) => mask.caret_at_or_after(last + 1),
            None => mask.len(),
        },
    };
    candidate(&seq, caret)
}

/// Clear everything; caret on the first slot.
pub fn resolve_reset(mask: &Mask) -> InputState {
    InputState::with_caret(String::new(), mask.first_slot_position())
}

fn candidate(seq: &SignificantSequence, caret: usize) -> InputState {
    InputState::with_caret(seq.to_string(), caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "+7 (___) ___-__-__";

    fn phone() -> Mask {
        Mask::new(PHONE, '_').unwrap()
    }

    #[test]
    fn insert_skips_over_literals() {
        let mask = phone();
        let next = resolve_insert(&mask, "+7 (1234__) ___-__-__", 8);
        assert_eq!(next.value, "+7 (1234__) ___-__-__");
        assert_eq!(next.caret(), 9);

        assert_eq!(resolve_insert(&mask, "+7 (1", 5).caret(), 5);
        assert_eq!(resolve_insert(&mask, "+", 0).caret(), 4);
    }

    #[test]
    fn insert_past_last_slot_lands_on_template_end() {
        let mask = phone();
        assert_eq!(resolve_insert(&mask, "+7 (900) 800-55-441", 19).caret(), 18);
    }

    #[test]
    fn backspace_removes_digit_left_of_caret() {
        let mask = phone();
        let next = resolve_backspace(&mask, "+7 (123) 4__-__-__", 10);
        assert_eq!(next.value, "123");
        assert_eq!(next.caret(), 9);
    }

    #[test]
    fn backspace_after_literal_consumes_next_slot() {
        let mask = phone();
        // caret - 1 is the ' ' after ')', so the first slot after it is hit.
        let next = resolve_backspace(&mask, "+7 (123) 4__-__-__", 9);
        assert_eq!(next.value, "123");
        assert_eq!(next.caret(), 8);

        // Nothing entered there yet: only the caret moves.
        let next = resolve_backspace(&mask, "+7 (123) ___-__-__", 9);
        assert_eq!(next.value, "123");
        assert_eq!(next.caret(), 8);
    }

    #[test]
    fn backspace_at_first_slot_hits_first_digit() {
        let mask = phone();
        let next = resolve_backspace(&mask, "+7 (123) ___-__-__", 4);
        assert_eq!(next.value, "23");
        assert_eq!(next.caret(), 3);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mask = phone();
        let next = resolve_backspace(&mask, "+7 (123) ___-__-__", 0);
        assert_eq!(next.value, "123");
        assert_eq!(next.caret(), 0);
    }

    #[test]
    fn backspace_on_empty_slot_is_noop_for_sequence() {
        let mask = phone();
        let next = resolve_backspace(&mask, "+7 (12_) ___-__-__", 14);
        assert_eq!(next.value, "12");
        assert_eq!(next.caret(), 13);
    }

    #[test]
    fn delete_removes_digit_under_caret() {
        let mask = phone();
        let next = resolve_delete(&mask, "+7 (123) 4__-__-__", 5);
        assert_eq!(next.value, "134");
        assert_eq!(next.caret(), 5);

        // From a literal the next slot is targeted.
        let next = resolve_delete(&mask, "+7 (123) 4__-__-__", 7);
        assert_eq!(next.value, "123");
        assert_eq!(next.caret(), 7);
    }

    #[test]
    fn delete_after_last_slot_is_noop() {
        let mask = phone();
        let full = "+7 (900) 800-55-44";
        let next = resolve_delete(&mask, full, 18);
        assert_eq!(next.value, "9008005544");
        assert_eq!(next.caret(), 18);

        let next = resolve_delete(&mask, full, 42);
        assert_eq!(next.value, "9008005544");
        assert_eq!(next.caret(), 18);
    }

    #[test]
    fn paste_into_empty_field() {
        let mask = phone();
        let next = resolve_paste(
            &mask,
            PHONE,
            "123",
            SelectionRange::caret(4),
            PasteSelection::SlotsInRange,
        );
        assert_eq!(next.value, "123");
        assert_eq!(next.caret(), 9);
    }

    #[test]
    fn paste_far_right_of_entered_text_packs_left() {
        let mask = phone();
        let next = resolve_paste(
            &mask,
            "+7 (1__) ___-__-__",
            "23",
            SelectionRange::caret(13),
            PasteSelection::SlotsInRange,
        );
        assert_eq!(next.value, "123");
        assert_eq!(next.caret(), 9);
    }

    #[test]
    fn paste_in_middle_inserts_before_existing_digits() {
        let mask = phone();
        let next = resolve_paste(
            &mask,
            "+7 (123) ___-__-__",
            "99",
            SelectionRange::caret(5),
            PasteSelection::SlotsInRange,
        );
        assert_eq!(next.value, "19923");
        assert_eq!(next.caret(), 9);
    }

    #[test]
    fn paste_overflow_puts_caret_at_end() {
        let mask = phone();
        let next = resolve_paste(
            &mask,
            PHONE,
            "8 (900) 800-55-44",
            SelectionRange::caret(0),
            PasteSelection::SlotsInRange,
        );
        assert_eq!(next.value, "89008005544");
        assert_eq!(next.caret(), 18);
    }

    #[test]
    fn paste_without_digits_leaves_caret_in_place() {
        let mask = phone();
        let next = resolve_paste(
            &mask,
            "+7 (1__) ___-__-__",
            "abc",
            SelectionRange::caret(13),
            PasteSelection::SlotsInRange,
        );
        assert_eq!(next.value, "1");
        assert_eq!(next.caret(), 13);

        let next = resolve_paste(
            &mask,
            "+7 (1__) ___-__-__",
            "",
            SelectionRange::caret(40),
            PasteSelection::SlotsInRange,
        );
        assert_eq!(next.caret(), 18);
    }

    #[test]
    fn paste_over_selection_spanning_literals() {
        let mask = phone();
        let current = "+7 (123) 456-__-__";
        // Select "3) 4": two slots, two literals.
        let selection = SelectionRange::new(6, 10);

        let next = resolve_paste(&mask, current, "0", selection, PasteSelection::SlotsInRange);
        assert_eq!(next.value, "12056");
        assert_eq!(next.caret(), 9);

        let next = resolve_paste(&mask, current, "0", selection, PasteSelection::RawLength);
        assert_eq!(next.value, "120");
        assert_eq!(next.caret(), 9);
    }

    #[test]
    fn reset_clears_and_parks_caret_on_first_slot() {
        let next = resolve_reset(&phone());
        assert_eq!(next.value, "");
        assert_eq!(next.caret(), 4);
    }

    #[test]
    fn resolve_dispatches_by_kind() {
        let mask = phone();
        let next = resolve(
            &mask,
            "+7 (123) ___-__-__",
            &Edit::Delete {
                direction: Direction::Backward,
                caret: 7,
            },
            PasteSelection::default(),
        );
        assert_eq!(next.value, "12");
        assert_eq!(next.caret(), 6);
    }
}
