//! In-memory host editor for session tests.

use abbrev::base::line_padding;
use abbrev::{HostEditor, InputPrompt, TextRange, TextSize};

/// A text buffer with one selection; records prompts and edits.
#[derive(Debug, Default)]
pub struct MockEditor {
    pub buffer: String,
    pub selection: TextRange,
    pub prompts: Vec<InputPrompt>,
    pub edits: Vec<(TextRange, String)>,
}

#[allow(dead_code)]
impl MockEditor {
    /// Caret at the end of `buffer`
    pub fn new(buffer: &str) -> Self {
        Self::with_caret(buffer, buffer.len())
    }

    pub fn with_caret(buffer: &str, caret: usize) -> Self {
        Self::with_selection(buffer, caret, caret)
    }

    pub fn with_selection(buffer: &str, start: usize, end: usize) -> Self {
        Self {
            buffer: buffer.to_string(),
            selection: TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32)),
            ..Self::default()
        }
    }

    fn caret(&self) -> usize {
        usize::from(self.selection.start())
    }
}

impl HostEditor for MockEditor {
    fn replace_speculative_text(&mut self, range: TextRange, text: &str) -> TextRange {
        self.buffer
            .replace_range(usize::from(range.start())..usize::from(range.end()), text);
        self.edits.push((range, text.to_string()));
        TextRange::at(range.start(), TextSize::of(text))
    }

    fn current_line_padding(&self) -> String {
        line_padding(&self.current_line().1).to_string()
    }

    fn selection_text(&self) -> String {
        self.buffer[self.selection].to_string()
    }

    fn selection_range(&self) -> TextRange {
        self.selection
    }

    fn current_line(&self) -> (TextRange, String) {
        let caret = self.caret();
        let start = self.buffer[..caret].rfind('\n').map_or(0, |i| i + 1);
        let end = self.buffer[caret..]
            .find('\n')
            .map_or(self.buffer.len(), |i| caret + i);
        let range = TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32));
        (range, self.buffer[start..end].to_string())
    }

    fn show_input_prompt(&mut self, prompt: &InputPrompt) {
        self.prompts.push(prompt.clone());
    }
}
