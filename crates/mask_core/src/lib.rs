//! # mask_core
//!
//! UI-agnostic masked-input engine.
//!
//! A mask is a literal template in which one reserved placeholder character
//! marks fillable slots, e.g. `+7 (___) ___-__-__`. This crate turns raw edits
//! reported by a text widget (typing, backspace, delete, paste, reset) into a
//! canonical masked value plus the caret position that should follow:
//! - [`Mask`]: validated template, slot lookup, masking and extraction
//! - [`MaskedInput`]: one field's committed state and the commit path
//! - [`MaskedInputStore`]: several fields keyed by [`FieldId`]
//! - [`hook`]: the interceptor that may rewrite a candidate before commit
//!
//! ## Design Principles
//!
//! Masking is always recomputed from the ordered significant characters
//! (ASCII digits) the user entered, never patched into the previous string.
//! Every caret computation works in slot ordinals, so literals never shift
//! the arithmetic. Positions are char offsets.
//!
//! The crate does not depend on any widget toolkit. The widget owns the
//! native text field, reports edits, writes back the committed value, and
//! only then applies the pending caret.
//!
//! ```
//! use mask_core::{MaskConfig, MaskedInput};
//!
//! let mut field = MaskedInput::new(MaskConfig::new("+7 (___) ___-__-__")).unwrap();
//! let state = field.on_raw_value_changed("+7 (9___) ___-__-__", 5);
//! assert_eq!(state.value, "+7 (9__) ___-__-__");
//! assert_eq!(field.take_pending_caret(), Some(5));
//! ```

mod config;
mod edit;
mod error;
mod field;
pub mod hook;
mod id;
mod mask;
pub mod resolve;
mod selection;
mod significant;
mod state;
mod store;
mod text;

pub use config::{MaskConfig, PasteSelection};
pub use edit::{Direction, Edit};
pub use error::MaskError;
pub use field::MaskedInput;
pub use hook::{BeforeMaskedStateChange, StateChange};
pub use id::FieldId;
pub use mask::{DEFAULT_PLACEHOLDER, Mask};
pub use selection::SelectionRange;
pub use significant::SignificantSequence;
pub use state::InputState;
pub use store::MaskedInputStore;

// Re-export text utilities for integration layers that address text by byte.
pub use text::{
    byte_to_char, char_len, char_to_byte, clamp_to_char_boundary, filter_significant,
    is_significant,
};
