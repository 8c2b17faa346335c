//! Host editor capability

use crate::base::TextRange;
use text_size::TextSize;

/// Input prompt shown when a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrompt {
    pub message: String,
    /// Pre-filled, fully selected text
    pub default_text: String,
}

/// What the engine needs from the editor it runs in.
///
/// Ranges are byte offsets into the editor buffer.
pub trait HostEditor {
    /// Replace `range` with `text`; returns the range the text now covers
    fn replace_speculative_text(&mut self, range: TextRange, text: &str) -> TextRange;

    /// Leading whitespace of the caret's line
    fn current_line_padding(&self) -> String;

    fn selection_text(&self) -> String;

    /// Empty at the caret when nothing is selected
    fn selection_range(&self) -> TextRange;

    /// Range and text of the caret's line, without the line break
    fn current_line(&self) -> (TextRange, String);

    fn show_input_prompt(&mut self, prompt: &InputPrompt);
}

impl<T: HostEditor + ?Sized> HostEditor for &mut T {
    fn replace_speculative_text(&mut self, range: TextRange, text: &str) -> TextRange {
        (**self).replace_speculative_text(range, text)
    }

    fn current_line_padding(&self) -> String {
        (**self).current_line_padding()
    }

    fn selection_text(&self) -> String {
        (**self).selection_text()
    }

    fn selection_range(&self) -> TextRange {
        (**self).selection_range()
    }

    fn current_line(&self) -> (TextRange, String) {
        (**self).current_line()
    }

    fn show_input_prompt(&mut self, prompt: &InputPrompt) {
        (**self).show_input_prompt(prompt)
    }
}

/// Range to wrap: the selection, or else the trimmed current line.
///
/// Returns `None` when nothing is selected and the line is blank.
pub fn capture_wrap_target(
    selection: TextRange,
    line_range: TextRange,
    line_text: &str,
) -> Option<TextRange> {
    if !selection.is_empty() {
        return Some(selection);
    }

    let trimmed = line_text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let leading = line_text.len() - line_text.trim_start().len();
    Some(TextRange::at(
        line_range.start() + TextSize::new(leading as u32),
        TextSize::of(trimmed),
    ))
}
