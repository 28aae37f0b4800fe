//! The state interceptor: the engine's single extension point.
//!
//! A hook sees the candidate produced by an edit resolver before it is
//! masked and committed, and returns the state to commit instead. The engine
//! masks whatever value comes back and adopts its caret verbatim.

use crate::state::InputState;
use crate::text::filter_significant;

/// Everything a hook gets to look at for one edit.
#[derive(Clone, Copy, Debug)]
pub struct StateChange<'a> {
    /// The committed state the field shows right now.
    pub current: &'a InputState,
    /// The committed state before `current`.
    pub previous: &'a InputState,
    /// The unmasked candidate the resolver produced.
    pub next: &'a InputState,
}

/// Boxed interceptor, as stored by [`MaskedInput`](crate::MaskedInput).
pub type BeforeMaskedStateChange = Box<dyn Fn(StateChange<'_>) -> InputState + Send + Sync>;

/// Build a hook that drops a trunk prefix from full-length numbers.
///
/// Digits are counted after `prefix` (normally [`Mask::prefix`]) is removed
/// from the candidate, so literal digits of the template never count. When
/// at least `full_len` digits remain and the first one is in `leading`, that
/// digit is removed and the caret is sent to `caret`. Otherwise the candidate
/// passes through untouched.
///
/// [`Mask::prefix`]: crate::Mask::prefix
///
/// ```
/// use mask_core::{MaskConfig, MaskedInput, hook::strip_leading_digit};
///
/// let field = MaskedInput::new(MaskConfig::new("+7 (___) ___-__-__")).unwrap();
/// let hook = strip_leading_digit(field.mask().prefix(), &['7', '8'], 11, 18);
/// let mut field = field.with_hook(hook);
/// let state = field.on_paste("89008005544", 4, 4, "+7 (___) ___-__-__");
/// assert_eq!(state.value, "+7 (900) 800-55-44");
/// assert_eq!(state.caret(), 18);
/// ```
pub fn strip_leading_digit(
    prefix: &str,
    leading: &[char],
    full_len: usize,
    caret: usize,
) -> impl Fn(StateChange<'_>) -> InputState + Send + Sync + 'static {
    let prefix = prefix.to_string();
    let leading = leading.to_vec();
    move |change: StateChange<'_>| {
        let value = change.next.value.as_str();
        let body = value.strip_prefix(prefix.as_str()).unwrap_or(value);
        let digits = filter_significant(body);
        let mut chars = digits.chars();
        match chars.next() {
            Some(first) if digits.len() >= full_len && leading.contains(&first) => {
                InputState::with_caret(chars.as_str(), caret)
            }
            _ => change.next.clone(),
        }
    }
}
