//! Construction-time configuration for a masked field.

use crate::error::MaskError;
use crate::mask::{DEFAULT_PLACEHOLDER, Mask};

/// How a paste that replaces a selection decides how many entered
/// characters the selection covered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PasteSelection {
    /// Count only the slots inside the selection. Literals selected along
    /// with digits remove nothing.
    #[default]
    SlotsInRange,
    /// Count every selected display character as one entered character.
    /// Over-deletes when the selection spans literals.
    RawLength,
}

/// Everything needed to build a [`MaskedInput`](crate::MaskedInput) apart
/// from the interceptor hook.
///
/// ```
/// use mask_core::{MaskConfig, PasteSelection};
///
/// let config = MaskConfig::new("+7 (___) ___-__-__")
///     .placeholder_char('_')
///     .paste_selection(PasteSelection::RawLength);
/// assert!(config.build_mask().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaskConfig {
    pub mask: String,
    pub placeholder_char: char,
    pub paste_selection: PasteSelection,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask: String::new(),
            placeholder_char: DEFAULT_PLACEHOLDER,
            paste_selection: PasteSelection::default(),
        }
    }
}

impl MaskConfig {
    pub fn new(mask: impl Into<String>) -> Self {
        Self {
            mask: mask.into(),
            ..Self::default()
        }
    }

    pub fn placeholder_char(mut self, placeholder: char) -> Self {
        self.placeholder_char = placeholder;
        self
    }

    pub fn paste_selection(mut self, policy: PasteSelection) -> Self {
        self.paste_selection = policy;
        self
    }

    /// Validate the template and placeholder.
    pub fn build_mask(&self) -> Result<Mask, MaskError> {
        Mask::new(&self.mask, self.placeholder_char)
    }
}
