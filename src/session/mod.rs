//! As-you-type sessions
//!
//! ```text
//!            blank input               valid input
//!   Empty ◄────────────── any ──────────────► Valid(result)
//!                          │
//!                          │ invalid input
//!                          ▼
//!              Invalid { last_valid }
//! ```
//!
//! The state machine is pure: [`expand_as_you_type`] and
//! [`wrap_as_you_type`] take the previous state and return the result to show
//! plus the next state. A failed keystroke keeps showing the last valid
//! expansion; raw error text is never emitted. Editor side effects live in
//! [`AsYouTypeCommand`], behind the [`HostEditor`] trait.

mod command;
mod history;
mod host;
mod serialize;

pub use command::{AsYouTypeCommand, Mode, expand_at_caret};
pub use history::History;
pub use host::{HostEditor, InputPrompt, capture_wrap_target};
pub use serialize::SharedSession;

use crate::expand::{ExpandError, ExpansionResult, Expander};
use crate::profile::SyntaxProfile;

/// State of an as-you-type session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing typed yet, or the input was cleared
    #[default]
    Empty,
    /// The current input expands
    Valid(ExpansionResult),
    /// The current input does not expand
    Invalid { last_valid: Option<ExpansionResult> },
}

impl SessionState {
    /// The most recent successful expansion of this session
    pub fn last_valid(&self) -> Option<&ExpansionResult> {
        match self {
            Self::Empty => None,
            Self::Valid(result) => Some(result),
            Self::Invalid { last_valid } => last_valid.as_ref(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Next state and the result to show for one keystroke's outcome
    pub fn transition(
        &self,
        outcome: Result<ExpansionResult, ExpandError>,
    ) -> (ExpansionResult, SessionState) {
        match outcome {
            Ok(result) => (result.clone(), Self::Valid(result)),
            Err(ExpandError::InputEmpty) => (ExpansionResult::noop(), Self::Empty),
            Err(err) => {
                tracing::trace!(error = %err, "keeping last valid expansion");
                let last_valid = self.last_valid().cloned();
                let shown = last_valid.clone().unwrap_or_else(ExpansionResult::noop);
                (shown, Self::Invalid { last_valid })
            }
        }
    }
}

/// One keystroke of an expansion session
pub fn expand_as_you_type(
    input: &str,
    state: &SessionState,
    profile: &dyn SyntaxProfile,
) -> (ExpansionResult, SessionState) {
    state.transition(Expander::new(profile).expand(input))
}

/// One keystroke of a wrap session around `selection`
pub fn wrap_as_you_type(
    input: &str,
    selection: &str,
    state: &SessionState,
    profile: &dyn SyntaxProfile,
) -> (ExpansionResult, SessionState) {
    // an empty abbreviation resets the session even when the selection is blank
    let outcome = if input.trim().is_empty() {
        Err(ExpandError::InputEmpty)
    } else {
        Expander::new(profile).wrap(input, selection)
    };
    state.transition(outcome)
}
