//! Serialized access to one session from overlapping events
//!
//! Keystrokes can arrive faster than expansions finish. Each event cancels
//! the one in flight and only the latest event may commit its state
//! transition, so a slow stale expansion never overwrites a newer one.

use super::SessionState;
use crate::expand::{ExpandError, ExpansionResult, Expander};
use crate::profile::SyntaxProfile;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
struct Inner {
    state: SessionState,
    /// Bumped by every event; a finished event commits only if still current
    generation: u64,
    in_flight: Option<CancellationToken>,
}

/// A session shared between threads
pub struct SharedSession<'p> {
    profile: &'p dyn SyntaxProfile,
    inner: Mutex<Inner>,
}

impl<'p> SharedSession<'p> {
    pub fn new(profile: &'p dyn SyntaxProfile) -> Self {
        Self {
            profile,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Start a new event, cancelling the one in flight
    fn begin(&self) -> (u64, CancellationToken) {
        let mut inner = self.inner.lock();
        if let Some(previous) = inner.in_flight.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        inner.generation += 1;
        inner.in_flight = Some(token.clone());
        (inner.generation, token)
    }

    /// Commit `outcome` if the event is still the latest one
    fn commit(
        &self,
        generation: u64,
        token: &CancellationToken,
        outcome: Result<ExpansionResult, ExpandError>,
    ) -> Option<ExpansionResult> {
        let mut inner = self.inner.lock();
        if inner.generation != generation || token.is_cancelled() {
            tracing::trace!(generation, "dropping superseded event");
            return None;
        }
        let (shown, state) = inner.state.transition(outcome);
        inner.state = state;
        inner.in_flight = None;
        Some(shown)
    }

    /// Expansion keystroke; `None` when a newer event superseded this one
    pub fn expand(&self, input: &str) -> Option<ExpansionResult> {
        let (generation, token) = self.begin();
        let outcome = match Expander::new(self.profile).expand_cancellable(input, &token) {
            Ok(Some(result)) => Ok(result),
            Ok(None) => return None,
            Err(err) => Err(err),
        };
        self.commit(generation, &token, outcome)
    }

    /// Wrap keystroke; `None` when a newer event superseded this one
    pub fn wrap(&self, input: &str, selection: &str) -> Option<ExpansionResult> {
        let (generation, token) = self.begin();
        let outcome = if input.trim().is_empty() {
            Err(ExpandError::InputEmpty)
        } else {
            Expander::new(self.profile).wrap(input, selection)
        };
        self.commit(generation, &token, outcome)
    }

    /// Cancel the event in flight and reset to [`SessionState::Empty`]
    pub fn cancel(&self) {
        let mut inner = self.inner.lock();
        if let Some(token) = inner.in_flight.take() {
            token.cancel();
        }
        inner.generation += 1;
        inner.state = SessionState::Empty;
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.inner.lock().state.clone()
    }
}
