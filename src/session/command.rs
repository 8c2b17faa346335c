//! Editor commands driving a session

use super::host::{HostEditor, InputPrompt, capture_wrap_target};
use super::{History, SessionState, expand_as_you_type, wrap_as_you_type};
use crate::base::{TextRange, extract_abbreviation, line_padding, unindent_text};
use crate::expand::{ExpandError, ExpansionResult, Expander};
use crate::profile::SyntaxProfile;
use text_size::TextSize;

const DEFAULT_INPUT: &str = "div";

/// What a session does with the typed abbreviation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Insert the expansion at the caret
    Expand,
    /// Wrap the captured text, already unindented
    Wrap { selection: String },
}

/// An as-you-type command bound to one host editor.
///
/// Each prompt event re-runs the pipeline and replaces only the text the
/// command itself inserted, so the rest of the buffer is never touched.
pub struct AsYouTypeCommand<'p, H: HostEditor> {
    host: H,
    profile: &'p dyn SyntaxProfile,
    mode: Mode,
    state: SessionState,
    /// Buffer range currently holding the command's text
    speculative: TextRange,
    /// Text the speculative range held before the session
    original: String,
}

impl<'p, H: HostEditor> AsYouTypeCommand<'p, H> {
    /// Start an expansion session at the caret and open the prompt
    pub fn expand(mut host: H, profile: &'p dyn SyntaxProfile, history: &History) -> Self {
        let caret = host.selection_range().start();
        host.show_input_prompt(&InputPrompt {
            message: "Enter Abbreviation: ".to_string(),
            default_text: default_text(history),
        });

        Self {
            host,
            profile,
            mode: Mode::Expand,
            state: SessionState::Empty,
            speculative: TextRange::empty(caret),
            original: String::new(),
        }
    }

    /// Start a wrap session around the selection (or the current line) and
    /// open the prompt
    pub fn wrap(
        mut host: H,
        profile: &'p dyn SyntaxProfile,
        history: &History,
    ) -> Result<Self, ExpandError> {
        let selection = host.selection_range();
        let (line_range, line_text) = host.current_line();
        let target = capture_wrap_target(selection, line_range, &line_text)
            .ok_or(ExpandError::NothingToWrap)?;

        let original = if selection.is_empty() {
            let start = usize::from(target.start() - line_range.start());
            line_text[start..start + usize::from(target.len())].to_string()
        } else {
            host.selection_text()
        };
        let unindented = unindent_text(&original, &host.current_line_padding());

        host.show_input_prompt(&InputPrompt {
            message: "Enter Wrap Abbreviation: ".to_string(),
            default_text: default_text(history),
        });
        tracing::trace!(range = ?target, "captured wrap target");

        Ok(Self {
            host,
            profile,
            mode: Mode::Wrap {
                selection: unindented,
            },
            state: SessionState::Empty,
            speculative: target,
            original,
        })
    }

    /// The prompt text changed
    pub fn on_change(&mut self, input: &str) -> ExpansionResult {
        let (result, state) = match &self.mode {
            Mode::Expand => expand_as_you_type(input, &self.state, self.profile),
            Mode::Wrap { selection } => wrap_as_you_type(input, selection, &self.state, self.profile),
        };
        self.state = state;

        // with nothing valid to show yet, the buffer keeps its original text
        let text = match self.state.last_valid() {
            Some(_) => result.text.as_str(),
            None => self.original.as_str(),
        };
        self.speculative = self.host.replace_speculative_text(self.speculative, text);
        result
    }

    /// The prompt was confirmed with `input`
    pub fn on_commit(&mut self, input: &str, history: &mut History) -> ExpansionResult {
        let result = self.on_change(input);
        if self.state.is_valid() {
            history.record(input);
        }
        tracing::debug!(input, committed = self.state.is_valid(), "as-you-type session finished");
        result
    }

    /// The prompt was dismissed: put the original text back
    pub fn on_cancel(&mut self) {
        self.speculative = self
            .host
            .replace_speculative_text(self.speculative, &self.original);
        self.state = SessionState::Empty;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Buffer range currently holding the command's text
    pub fn speculative_range(&self) -> TextRange {
        self.speculative
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

fn default_text(history: &History) -> String {
    history.latest().unwrap_or(DEFAULT_INPUT).to_string()
}

/// Expand the abbreviation left of the caret in place.
///
/// Returns `None`, leaving the buffer alone, when there is no abbreviation
/// or it does not expand. The expansion is indented with the line's padding.
pub fn expand_at_caret<H: HostEditor + ?Sized>(
    host: &mut H,
    profile: &dyn SyntaxProfile,
) -> Option<ExpansionResult> {
    let (line_range, line_text) = host.current_line();
    let caret = host.selection_range().end().checked_sub(line_range.start())?;
    let (range, abbreviation) = extract_abbreviation(&line_text, usize::from(caret))?;

    let mut result = Expander::new(profile).expand(abbreviation).ok()?;
    let padding = line_padding(&line_text);
    if !padding.is_empty() {
        reindent(&mut result, padding);
    }

    let range = range + line_range.start();
    host.replace_speculative_text(range, &result.text);
    Some(result)
}

/// Prefix every line after the first with `padding`, shifting offsets
fn reindent(result: &mut ExpansionResult, padding: &str) {
    let shift = |offset: TextSize, text: &str| {
        let lines_before = text[..usize::from(offset)].matches('\n').count() as u32;
        offset + TextSize::new(padding.len() as u32 * lines_before)
    };

    let text = result.text.clone();
    result.caret_offset = shift(result.caret_offset, &text);
    for stop in &mut result.tab_stops {
        stop.offset = shift(stop.offset, &text);
    }
    result.text = text.replace('\n', &format!("\n{}", padding));
}
