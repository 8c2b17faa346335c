//! `$#` numbering placeholders

use std::borrow::Cow;

/// Replace `$#` with `number` and `$$` with a literal `$`.
///
/// Any other `$` is kept as is. Text without a `$` is borrowed unchanged.
pub fn substitute<'a>(text: &'a str, number: &str) -> Cow<'a, str> {
    if !text.contains('$') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + number.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('#') => {
                chars.next();
                out.push_str(number);
            }
            Some('$') => {
                chars.next();
                out.push('$');
            }
            _ => out.push('$'),
        }
    }
    Cow::Owned(out)
}
