//! Foundation types for the abbreviation engine.
//!
//! This module provides:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Line helpers used when splicing a selection into an expansion
//!   ([`line_padding`], [`unindent_text`]) and when picking the
//!   abbreviation to the left of the caret ([`extract_abbreviation`])
//!
//! This module has NO dependencies on other crate modules.

mod text;

pub use text::{extract_abbreviation, line_padding, unindent_text};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
