//! Text manipulation utilities for editor lines and selections.

use text_size::{TextRange, TextSize};

/// Return the leading whitespace of a line.
///
/// # Example
/// ```
/// use abbrev::base::line_padding;
///
/// assert_eq!(line_padding("\t\t<div>"), "\t\t");
/// assert_eq!(line_padding("<div>"), "");
/// ```
pub fn line_padding(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}

/// Remove `pad` from the start of every line that begins with it.
///
/// Lines that do not start with the exact padding (for example a tab-indented
/// line when `pad` is made of spaces) are kept unchanged. Lines are joined
/// with `\n`.
pub fn unindent_text(text: &str, pad: &str) -> String {
    if pad.is_empty() {
        return text.lines().collect::<Vec<_>>().join("\n");
    }

    text.lines()
        .map(|line| line.strip_prefix(pad).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Characters that may appear in an abbreviation outside of `[...]` and `{...}`.
#[inline]
fn is_abbreviation_char(c: char) -> bool {
    c.is_alphanumeric() || "_-:.#$*+>^()!@/".contains(c)
}

/// Find the abbreviation that ends at `caret` (a byte offset into `line`).
///
/// Scans left until whitespace or a character that cannot be part of an
/// abbreviation. Bracketed attribute lists and `{text}` spans are skipped as
/// a whole, so `a[title="two words"]` is extracted intact. When the scan stops
/// at `<`, the preceding markup up to the first `>` is dropped so that
/// `<p>div` yields `div`.
///
/// Returns `None` when there is nothing to expand or brackets are unbalanced.
pub fn extract_abbreviation(line: &str, caret: usize) -> Option<(TextRange, &str)> {
    let mut caret = caret.min(line.len());
    while !line.is_char_boundary(caret) {
        caret -= 1;
    }

    let prefix = &line[..caret];
    let mut start = caret;
    let mut brace_depth = 0usize;
    let mut bracket_depth = 0usize;
    let mut stopped_at_tag = false;

    for (i, c) in prefix.char_indices().rev() {
        if brace_depth > 0 {
            match c {
                '{' => brace_depth -= 1,
                '}' => brace_depth += 1,
                _ => {}
            }
        } else if bracket_depth > 0 {
            match c {
                '[' => bracket_depth -= 1,
                ']' => bracket_depth += 1,
                _ => {}
            }
        } else {
            match c {
                '}' => brace_depth += 1,
                ']' => bracket_depth += 1,
                c if is_abbreviation_char(c) => {}
                '<' => {
                    stopped_at_tag = true;
                    break;
                }
                _ => break,
            }
        }
        start = i;
    }

    if brace_depth > 0 || bracket_depth > 0 {
        return None;
    }

    if stopped_at_tag {
        let close = line[start..caret].find('>')?;
        start += close + 1;
    }

    let abbreviation = &line[start..caret];
    if abbreviation.is_empty() {
        return None;
    }

    let range = TextRange::new(TextSize::new(start as u32), TextSize::new(caret as u32));
    Some((range, abbreviation))
}
