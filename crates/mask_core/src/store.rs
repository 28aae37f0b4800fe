//! Caller-owned collection of masked fields.
//!
//! A form with several masked inputs keeps one [`MaskedInput`] per field.
//! The store routes edits to the right field by [`FieldId`]; edits for ids
//! that were never registered are ignored and reported as `None`.

use crate::config::MaskConfig;
use crate::edit::Edit;
use crate::error::MaskError;
use crate::field::MaskedInput;
use crate::id::FieldId;
use crate::state::InputState;
use std::collections::HashMap;

/// Masked fields keyed by id.
///
/// # Example
///
/// ```
/// use mask_core::{Edit, FieldId, MaskConfig, MaskedInputStore};
///
/// let mut store = MaskedInputStore::new();
/// let id = FieldId::from_raw(1);
/// store.register(id, MaskConfig::new("__.__.____")).unwrap();
///
/// store.apply(id, Edit::Insert { raw: "3103__.____".into(), caret: 4 });
/// assert_eq!(store.value(id), Some("31.03.____"));
/// ```
#[derive(Debug, Default)]
pub struct MaskedInputStore {
    fields: HashMap<FieldId, MaskedInput>,
}

impl MaskedInputStore {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns `true` if a field is registered under `id`.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build and register a field from `config`, replacing any field already
    /// under `id`.
    pub fn register(&mut self, id: FieldId, config: MaskConfig) -> Result<(), MaskError> {
        let field = MaskedInput::new(config)?;
        self.insert(id, field);
        Ok(())
    }

    /// Register a prebuilt field (e.g. one carrying a hook).
    pub fn insert(&mut self, id: FieldId, field: MaskedInput) {
        log::debug!(
            target: "mask_core.store",
            "register field {} with mask {:?}",
            id.as_raw(),
            field.mask().template()
        );
        self.fields.insert(id, field);
    }

    pub fn remove(&mut self, id: FieldId) -> Option<MaskedInput> {
        let removed = self.fields.remove(&id);
        if removed.is_some() {
            log::debug!(target: "mask_core.store", "remove field {}", id.as_raw());
        }
        removed
    }

    /// Drop every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn get(&self, id: FieldId) -> Option<&MaskedInput> {
        self.fields.get(&id)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut MaskedInput> {
        self.fields.get_mut(&id)
    }

    /// Committed state of a field.
    pub fn state(&self, id: FieldId) -> Option<&InputState> {
        self.fields.get(&id).map(MaskedInput::state)
    }

    /// Committed value of a field.
    pub fn value(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(MaskedInput::value)
    }

    /// Route an edit to a field and return its new committed state.
    pub fn apply(&mut self, id: FieldId, edit: Edit) -> Option<&InputState> {
        let Some(field) = self.fields.get_mut(&id) else {
            log::debug!(
                target: "mask_core.store",
                "dropping {} edit for unknown field {}",
                edit.kind(),
                id.as_raw()
            );
            return None;
        };
        Some(field.apply(edit))
    }

    /// Default caret for a field that just gained focus.
    pub fn focus_caret(&self, id: FieldId) -> Option<usize> {
        self.fields.get(&id).map(MaskedInput::focus_caret)
    }

    /// Caret write queued by the field's last commit.
    pub fn take_pending_caret(&mut self, id: FieldId) -> Option<usize> {
        self.fields.get_mut(&id)?.take_pending_caret()
    }
}
