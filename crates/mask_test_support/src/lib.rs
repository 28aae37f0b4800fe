//! Shared fixtures for masked-input tests and the `maskedit` CLI.
//!
//! - [`script`]: edit scripts (TOML or JSON) describing a mask, a sequence of
//!   edits and the committed state expected after each one
//! - [`snapshot`]: stable one-line rendering of committed states
//! - [`diff_lines`]: first-mismatch report for two line lists

pub mod script;
pub mod snapshot;

/// Format tag every edit script must declare.
pub const SCRIPT_FORMAT_V1: &str = "maskedit-script-v1";

/// Quote-safe rendering of a committed value for snapshot lines.
///
/// Masks are free text, so quotes, backslashes and control characters are
/// escaped to keep every snapshot on one line; everything else, including
/// non-ASCII literals such as `№`, is kept as is.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '"' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => out.extend(ch.escape_unicode()),
            _ => out.push(ch),
        }
    }
    out
}

/// Report the first differing step between two snapshot line lists, with a
/// little context on each side.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    use std::fmt::Write;
    let missing = "<missing>";
    let mismatch = (0..max).find(|&i| expected.get(i) != actual.get(i));
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at step {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(String::as_str)
                .unwrap_or(missing);
            let right = actual.get(line_idx).map(String::as_str).unwrap_or(missing);
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} steps, actual {} steps",
        expected.len(),
        actual.len()
    );
    out
}
