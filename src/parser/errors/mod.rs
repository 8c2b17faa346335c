//! Parser error handling module
//!
//! This module provides error handling for the abbreviation parser:
//! - Categorized error codes
//! - Context-aware error messages
//! - Related span tracking (e.g., "opened here" for unclosed brackets)

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{ParseError, ParseErrorBuilder, RelatedInfo, unexpected_in_context};
