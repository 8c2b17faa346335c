//! Expansion entry points
//!
//! ```text
//! parse → expand_repeats → resolve → render
//! ```
//!
//! [`Expander`] returns typed errors; the free functions
//! [`expand_abbreviation`] and [`wrap_with_abbreviation`] never fail and
//! fall back to echoing their input.

use crate::parser::{ParseError, parse};
use crate::profile::SyntaxProfile;
use crate::render::{RenderOptions, render};
use crate::resolve::{ResolutionError, resolve};
use crate::tree::{
    AbbreviationNode, MAX_EXPANDED_NODES, Repeat, expand_repeats, expand_repeats_with_lines,
    mark_wrap_target,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

pub use crate::render::{ExpansionResult, TabStop};

/// Why an expansion produced no output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// The abbreviation is empty or whitespace
    #[error("empty abbreviation")]
    InputEmpty,

    /// Wrapping was requested without any text to wrap
    #[error("nothing to wrap")]
    NothingToWrap,

    /// The abbreviation has no element that can hold wrapped text
    #[error("abbreviation has no element to wrap '{0}' with")]
    NoWrapTarget(String),

    /// Multipliers would produce more nodes than the expansion budget
    #[error("abbreviation expands to {nodes} nodes, the limit is {limit}")]
    TooLarge { nodes: usize, limit: usize },
}

impl ExpandError {
    /// Whether more typing could still make the input valid
    pub fn is_incomplete_input(&self) -> bool {
        match self {
            Self::Parse(err) => err.code.is_incomplete_input(),
            Self::InputEmpty => true,
            _ => false,
        }
    }
}

/// Runs the pipeline against one profile
#[derive(Clone, Copy)]
pub struct Expander<'p> {
    profile: &'p dyn SyntaxProfile,
    options: &'p RenderOptions,
}

static DEFAULT_OPTIONS: RenderOptions = RenderOptions {
    tab_stops: true,
    indent: None,
};

impl<'p> Expander<'p> {
    pub fn new(profile: &'p dyn SyntaxProfile) -> Self {
        Self {
            profile,
            options: &DEFAULT_OPTIONS,
        }
    }

    pub fn with_options(mut self, options: &'p RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn profile(&self) -> &'p dyn SyntaxProfile {
        self.profile
    }

    /// Expand `input` into markup
    pub fn expand(&self, input: &str) -> Result<ExpansionResult, ExpandError> {
        let tree = self.parse(input)?;
        self.finish(expand_repeats(tree))
    }

    /// Expand `input`, stopping between stages once `cancel` fires.
    ///
    /// Returns `Ok(None)` when cancelled.
    pub fn expand_cancellable(
        &self,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<ExpansionResult>, ExpandError> {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        let tree = self.parse(input)?;
        if cancel.is_cancelled() {
            return Ok(None);
        }
        let tree = resolve(expand_repeats(tree), self.profile)?;
        if cancel.is_cancelled() {
            return Ok(None);
        }
        Ok(Some(render(&tree, self.profile, self.options)))
    }

    /// Expand `input` around `selection`.
    ///
    /// The selection goes into the deepest last element. If the abbreviation
    /// has an implicit multiplier (`li*`), every non-blank line of the
    /// selection gets its own copy of that node instead.
    pub fn wrap(&self, input: &str, selection: &str) -> Result<ExpansionResult, ExpandError> {
        let content = selection.trim_matches(|c| c == '\n' || c == '\r');
        if content.trim().is_empty() {
            return Err(ExpandError::NothingToWrap);
        }
        let tree = self.parse(input)?;

        let tree = if tree.descendants().any(|n| n.repeat == Repeat::Implicit) {
            let lines: Vec<String> = content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            match expand_repeats_with_lines(tree, &lines) {
                (tree, true) => tree,
                (tree, false) => self.mark(tree, content)?,
            }
        } else {
            self.mark(expand_repeats(tree), content)?
        };

        self.finish(tree)
    }

    fn parse(&self, input: &str) -> Result<AbbreviationNode, ExpandError> {
        if input.trim().is_empty() {
            return Err(ExpandError::InputEmpty);
        }
        let tree = parse(input)?;

        let nodes = tree.expanded_len();
        if nodes > MAX_EXPANDED_NODES {
            return Err(ExpandError::TooLarge {
                nodes,
                limit: MAX_EXPANDED_NODES,
            });
        }
        Ok(tree)
    }

    fn mark(&self, mut tree: AbbreviationNode, content: &str) -> Result<AbbreviationNode, ExpandError> {
        if mark_wrap_target(&mut tree, content, true) {
            Ok(tree)
        } else {
            Err(ExpandError::NoWrapTarget(content.to_string()))
        }
    }

    fn finish(&self, tree: AbbreviationNode) -> Result<ExpansionResult, ExpandError> {
        let tree = resolve(tree, self.profile)?;
        Ok(render(&tree, self.profile, self.options))
    }
}

/// Expand `input`; on failure the raw input is echoed with `success = false`
pub fn expand_abbreviation(input: &str, profile: &dyn SyntaxProfile) -> ExpansionResult {
    match Expander::new(profile).expand(input) {
        Ok(result) => result,
        Err(ExpandError::InputEmpty) => ExpansionResult::noop(),
        Err(err) => {
            tracing::debug!(input, error = %err, "expansion failed");
            ExpansionResult::failed(input)
        }
    }
}

/// Wrap `selection` with `input`; on failure the selection is echoed with
/// `success = false`
pub fn wrap_with_abbreviation(
    input: &str,
    selection: &str,
    profile: &dyn SyntaxProfile,
) -> ExpansionResult {
    match Expander::new(profile).wrap(input, selection) {
        Ok(result) => result,
        Err(err) => {
            tracing::debug!(input, error = %err, "wrap failed");
            ExpansionResult::failed(selection)
        }
    }
}
