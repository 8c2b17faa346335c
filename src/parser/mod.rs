//! Abbreviation parser
//!
//! ```text
//! Abbreviation text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Parser → flat (operator, element) sequences
//!     ↓
//! Assembly → AbbreviationNode tree
//! ```
//!
//! Parsing is all-or-nothing: either a complete tree comes back or a single
//! [`ParseError`] pointing at the offending token.

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod lexer;
mod token_kind;

pub use errors::{ErrorCode, ParseContext, ParseError, RelatedInfo};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{parse, parse_tokens};
pub use token_kind::TokenKind;
