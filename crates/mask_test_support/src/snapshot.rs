//! One-line snapshots of committed states: `"<value>"@<caret>`.
//!
//! Fixtures write the expectation unquoted as `<value>@<caret>`; the caret
//! is everything after the last `@`, so values may themselves contain `@`.

use crate::escape_text;
use mask_core::InputState;

/// Render a committed state. Non-collapsed selections render as `@start..end`.
pub fn format_state(state: &InputState) -> String {
    let sel = state.selection();
    if sel.is_empty() {
        format!("\"{}\"@{}", escape_text(&state.value), sel.start)
    } else {
        format!(
            "\"{}\"@{}..{}",
            escape_text(&state.value),
            sel.start,
            sel.end
        )
    }
}

/// Parse a fixture expectation `value@caret` into a collapsed state.
pub fn parse_expect(raw: &str) -> Option<InputState> {
    let (value, caret) = raw.rsplit_once('@')?;
    let caret = caret.trim().parse::<usize>().ok()?;
    Some(InputState::with_caret(value, caret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_collapsed_and_ranged() {
        assert_eq!(
            format_state(&InputState::with_caret("+7 (1__)", 5)),
            "\"+7 (1__)\"@5"
        );
        let ranged = InputState {
            value: "ab".to_string(),
            selection_start: 0,
            selection_end: 2,
        };
        assert_eq!(format_state(&ranged), "\"ab\"@0..2");
    }

    #[test]
    fn parse_expect_splits_on_last_at() {
        let st = parse_expect("a@b__@3").unwrap();
        assert_eq!(st.value, "a@b__");
        assert_eq!(st.caret(), 3);
        assert!(parse_expect("no caret").is_none());
        assert!(parse_expect("x@y").is_none());
    }
}
