//! One masked field: the commit path every edit goes through.

use crate::config::{MaskConfig, PasteSelection};
use crate::edit::{Direction, Edit};
use crate::error::MaskError;
use crate::hook::{BeforeMaskedStateChange, StateChange};
use crate::mask::Mask;
use crate::resolve::resolve;
use crate::selection::SelectionRange;
use crate::state::InputState;
use std::fmt;

/// Masking engine for a single field.
///
/// Owns the mask, the optional interceptor hook and the committed state.
/// Each entry point resolves one edit, lets the hook rewrite the candidate,
/// masks it, commits it, and returns the committed state. The caret target
/// of the commit is also queued as a *pending caret*, which the widget should
/// take with [`take_pending_caret`](Self::take_pending_caret) only after it
/// has reflected the new value, so the caret is never placed against stale
/// content.
///
/// # Example
///
/// ```
/// use mask_core::{MaskConfig, MaskedInput};
///
/// let mut field = MaskedInput::new(MaskConfig::new("+7 (___) ___-__-__")).unwrap();
/// let state = field.on_paste("123", 4, 4, "+7 (___) ___-__-__").clone();
/// assert_eq!(state.value, "+7 (123) ___-__-__");
/// assert_eq!(state.caret(), 9);
///
/// let state = field.on_backspace(7);
/// assert_eq!(state.value, "+7 (12_) ___-__-__");
/// assert_eq!(state.caret(), 6);
/// ```
pub struct MaskedInput {
    mask: Mask,
    paste_selection: PasteSelection,
    hook: Option<BeforeMaskedStateChange>,
    committed: InputState,
    previous: InputState,
    pending_caret: Option<usize>,
}

impl MaskedInput {
    /// Build a field from its configuration. The field starts blank with the
    /// caret on the first slot; no hook runs for this initial state.
    pub fn new(config: MaskConfig) -> Result<Self, MaskError> {
        let mask = config.build_mask()?;
        Ok(Self::from_parts(mask, config.paste_selection))
    }

    /// Build a field around an already validated mask, with default options.
    pub fn from_mask(mask: Mask) -> Self {
        Self::from_parts(mask, PasteSelection::default())
    }

    fn from_parts(mask: Mask, paste_selection: PasteSelection) -> Self {
        let blank = InputState::with_caret(mask.blank(), mask.first_slot_position());
        Self {
            mask,
            paste_selection,
            hook: None,
            previous: blank.clone(),
            committed: blank,
            pending_caret: None,
        }
    }

    /// Install the interceptor hook.
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(StateChange<'_>) -> InputState + Send + Sync + 'static,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Replace or remove the interceptor hook.
    pub fn set_hook(&mut self, hook: Option<BeforeMaskedStateChange>) {
        self.hook = hook;
    }

    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// The committed state.
    #[inline]
    pub fn state(&self) -> &InputState {
        &self.committed
    }

    /// The committed state before the current one.
    #[inline]
    pub fn previous_state(&self) -> &InputState {
        &self.previous
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.committed.value
    }

    /// The widget's native value changed (typing, IME commit, autofill).
    pub fn on_raw_value_changed(&mut self, raw: &str, raw_caret: usize) -> &InputState {
        self.apply(Edit::Insert {
            raw: raw.to_string(),
            caret: raw_caret,
        })
    }

    /// Backspace with the caret at `caret`. The native deletion must be
    /// suppressed by the widget.
    pub fn on_backspace(&mut self, caret: usize) -> &InputState {
        self.apply(Edit::Delete {
            direction: Direction::Backward,
            caret,
        })
    }

    /// Forward delete with the caret at `caret`.
    pub fn on_delete(&mut self, caret: usize) -> &InputState {
        self.apply(Edit::Delete {
            direction: Direction::Forward,
            caret,
        })
    }

    /// Paste `text` over `selection_start..selection_end` of `current_value`.
    pub fn on_paste(
        &mut self,
        text: &str,
        selection_start: usize,
        selection_end: usize,
        current_value: &str,
    ) -> &InputState {
        let selection = SelectionRange::new(selection_start, selection_end);
        self.commit_edit(
            current_value,
            Edit::Paste {
                text: text.to_string(),
                selection,
            },
        )
    }

    /// Clear the field.
    pub fn on_reset(&mut self) -> &InputState {
        self.apply(Edit::Reset)
    }

    /// Resolve and commit any edit against the committed value.
    pub fn apply(&mut self, edit: Edit) -> &InputState {
        let current = self.committed.value.clone();
        self.commit_edit(&current, edit)
    }

    /// Effective caret for a widget restoring its native cursor: never left
    /// of the first slot, never past the template end.
    pub fn caret_position(&self, desired: usize) -> usize {
        self.mask
            .first_slot_position()
            .max(desired)
            .min(self.mask.len())
    }

    /// Default caret when the field gains focus without a caret hint.
    pub fn focus_caret(&self) -> usize {
        self.mask.first_slot_position()
    }

    /// Take the caret write queued by the last commit.
    pub fn take_pending_caret(&mut self) -> Option<usize> {
        self.pending_caret.take()
    }

    fn commit_edit(&mut self, current: &str, edit: Edit) -> &InputState {
        let candidate = resolve(&self.mask, current, &edit, self.paste_selection);
        let next = match &self.hook {
            Some(hook) => {
                let intercepted = hook(StateChange {
                    current: &self.committed,
                    previous: &self.previous,
                    next: &candidate,
                });
                if intercepted != candidate {
                    log::debug!(
                        target: "mask_core.field",
                        "hook rewrote {} candidate: {:?}@{} -> {:?}@{}",
                        edit.kind(),
                        candidate.value,
                        candidate.selection_start,
                        intercepted.value,
                        intercepted.selection_start
                    );
                }
                intercepted
            }
            None => candidate,
        };
        self.commit(next, edit.kind())
    }

    fn commit(&mut self, next: InputState, kind: &'static str) -> &InputState {
        let value = self.mask.apply(&self.mask.extract(&next.value));
        let caret = next.selection_start.min(self.mask.len());
        let committed = InputState::with_caret(value, caret);

        log::trace!(
            target: "mask_core.field",
            "commit {kind}: {:?} caret={caret}",
            committed.value
        );

        self.previous = std::mem::replace(&mut self.committed, committed);
        self.pending_caret = Some(caret);
        &self.committed
    }
}

impl fmt::Debug for MaskedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedInput")
            .field("mask", &self.mask)
            .field("paste_selection", &self.paste_selection)
            .field("hook", &self.hook.is_some())
            .field("committed", &self.committed)
            .field("previous", &self.previous)
            .field("pending_caret", &self.pending_caret)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::strip_leading_digit;
    use std::sync::{Arc, Mutex};

    const PHONE: &str = "+7 (___) ___-__-__";

    fn phone() -> MaskedInput {
        MaskedInput::new(MaskConfig::new(PHONE)).unwrap()
    }

    #[test]
    fn starts_blank_with_caret_on_first_slot() {
        let field = phone();
        assert_eq!(field.state(), &InputState::with_caret(PHONE, 4));
        assert_eq!(field.focus_caret(), 4);
    }

    #[test]
    fn construction_rejects_placeholder_free_mask() {
        let err = MaskedInput::new(MaskConfig::new("+7 (...)")).unwrap_err();
        assert!(matches!(err, MaskError::InvalidMask { .. }));
    }

    #[test]
    fn typing_commits_masked_value_and_skips_literals() {
        let mut field = phone();
        let st = field.on_raw_value_changed("+7 (1___) ___-__-__", 5).clone();
        assert_eq!(st, InputState::with_caret("+7 (1__) ___-__-__", 5));

        field.on_raw_value_changed("+7 (12__) ___-__-__", 6);
        let st = field.on_raw_value_changed("+7 (123__) ___-__-__", 7).clone();
        assert_eq!(st, InputState::with_caret("+7 (123) ___-__-__", 9));
    }

    #[test]
    fn typing_a_letter_changes_nothing_but_the_caret() {
        let mut field = phone();
        field.on_paste("12", 4, 4, PHONE);
        let st = field.on_raw_value_changed("+7 (12x_) ___-__-__", 7);
        assert_eq!(st.value, "+7 (12_) ___-__-__");
    }

    #[test]
    fn pending_caret_is_taken_once_per_commit() {
        let mut field = phone();
        assert_eq!(field.take_pending_caret(), None);
        field.on_paste("123", 4, 4, PHONE);
        assert_eq!(field.take_pending_caret(), Some(9));
        assert_eq!(field.take_pending_caret(), None);
    }

    #[test]
    fn previous_state_tracks_last_commit() {
        let mut field = phone();
        field.on_paste("1", 4, 4, PHONE);
        field.on_paste("2", 5, 5, "+7 (1__) ___-__-__");
        assert_eq!(field.previous_state().value, "+7 (1__) ___-__-__");
        assert_eq!(field.value(), "+7 (12_) ___-__-__");
    }

    #[test]
    fn reset_restores_template() {
        let mut field = phone();
        field.on_paste("9008005544", 4, 4, PHONE);
        let st = field.on_reset();
        assert_eq!(st, &InputState::with_caret(PHONE, 4));
    }

    #[test]
    fn caret_position_never_precedes_first_slot() {
        let field = phone();
        assert_eq!(field.caret_position(0), 4);
        assert_eq!(field.caret_position(10), 10);
        assert_eq!(field.caret_position(99), 18);
    }

    #[test]
    fn hook_result_is_masked_and_caret_adopted() {
        let mut field = phone().with_hook(strip_leading_digit("+7 (", &['7', '8'], 11, 18));
        let st = field.on_paste("89008005544", 4, 4, PHONE);
        assert_eq!(st, &InputState::with_caret("+7 (900) 800-55-44", 18));
    }

    #[test]
    fn typing_into_full_field_keeps_caret_with_trunk_hook() {
        let mut field = phone().with_hook(strip_leading_digit("+7 (", &['7', '8'], 11, 18));
        field.on_paste("9008005544", 4, 4, PHONE);
        let st = field.on_raw_value_changed("+7 (5900) 800-55-44", 5);
        assert_eq!(st, &InputState::with_caret("+7 (590) 080-05-54", 5));
    }

    #[test]
    fn hook_caret_is_clamped_to_value_length() {
        let mut field = phone().with_hook(|change: StateChange<'_>| {
            InputState::with_caret(change.next.value.clone(), 500)
        });
        let st = field.on_paste("1", 4, 4, PHONE);
        assert_eq!(st.caret(), 18);
    }

    #[test]
    fn hook_sees_committed_previous_and_candidate() {
        let seen: Arc<Mutex<Vec<(String, String, String)>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let mut field = phone().with_hook(move |change: StateChange<'_>| {
            sink.lock().unwrap().push((
                change.current.value.clone(),
                change.previous.value.clone(),
                change.next.value.clone(),
            ));
            change.next.clone()
        });

        field.on_paste("12", 4, 4, PHONE);
        field.on_backspace(6);

        let seen = seen.lock().unwrap();
        assert_eq!(
            seen[0],
            (PHONE.to_string(), PHONE.to_string(), "12".to_string())
        );
        assert_eq!(
            seen[1],
            (
                "+7 (12_) ___-__-__".to_string(),
                PHONE.to_string(),
                "1".to_string()
            )
        );
    }

    #[test]
    fn removing_hook_restores_plain_behaviour() {
        let mut field = phone().with_hook(strip_leading_digit("+7 (", &['8'], 11, 18));
        field.set_hook(None);
        let st = field.on_paste("89008005544", 4, 4, PHONE);
        assert_eq!(st.value, "+7 (890) 080-05-54");
    }
}
