//! # markup-abbrev
//!
//! Abbreviation expansion for HTML/CSS-like markup: `div.wrap>ul>li*3` in,
//! an indented snippet with tab stops out.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → As-you-type state machine, host editor commands
//!   ↓
//! expand    → Entry points: Expander, ExpansionResult, ExpandError
//!   ↓
//! render    → Tree → text with indentation and tab stops
//!   ↓
//! resolve   → Profile lookup, implicit tags, numbering
//!   ↓
//! profile   → SyntaxProfile capability, built-in profiles, config files
//!   ↓
//! tree      → AbbreviationNode, repeat expansion, visitor
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, ParseError
//!   ↓
//! base      → TextRange/TextSize, line and indentation helpers
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → tree → profile → resolve → render → expand → session)
// ============================================================================

/// Foundation types: TextRange, TextSize, text helpers
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, error codes
pub mod parser;

/// Abbreviation tree: nodes, repeat expansion, traversal
pub mod tree;

/// Syntax profiles: snippets, implicit tags, formatting conventions
pub mod profile;

/// Resolver: applies a profile to a parsed tree
pub mod resolve;

/// Renderer: serializes a resolved tree
pub mod render;

/// Public entry points for full expansion and wrapping
pub mod expand;

/// As-you-type sessions and host editor integration
pub mod session;

// Re-export the entry points and the types they hand out
pub use base::{TextRange, TextSize, extract_abbreviation};
pub use expand::{
    ExpandError, ExpansionResult, Expander, TabStop, expand_abbreviation, wrap_with_abbreviation,
};
pub use parser::{ErrorCode, ParseError, parse};
#[cfg(feature = "config")]
pub use profile::{ConfigError, ProfileConfig, load_profile};
pub use profile::{OutputStyle, Profile, SelfClosing, Snippet, SyntaxProfile};
pub use render::RenderOptions;
pub use resolve::{ResolutionError, resolve};
pub use session::{
    AsYouTypeCommand, History, HostEditor, InputPrompt, SessionState, SharedSession,
    capture_wrap_target, expand_as_you_type, expand_at_caret, wrap_as_you_type,
};
pub use tree::{AbbreviationNode, NodeKind, Operator, Repeat};
