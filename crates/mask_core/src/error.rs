//! Construction-time errors.
//!
//! Every runtime edit is absorbed by clamping or no-op semantics, so the only
//! failures this crate reports are malformed masks.

use std::fmt;

/// Why a mask template was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskError {
    /// The placeholder character never occurs in the template, so the mask
    /// has no slot that could ever accept input.
    InvalidMask { template: String, placeholder: char },
    /// The placeholder character is itself significant (a digit), which would
    /// make unfilled slots indistinguishable from typed input.
    SignificantPlaceholder { placeholder: char },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::InvalidMask {
                template,
                placeholder,
            } => write!(
                f,
                "invalid mask {template:?}: placeholder {placeholder:?} does not occur in the template"
            ),
            MaskError::SignificantPlaceholder { placeholder } => {
                write!(f, "placeholder {placeholder:?} is a significant character")
            }
        }
    }
}

impl std::error::Error for MaskError {}
