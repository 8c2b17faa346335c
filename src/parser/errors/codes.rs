//! Error code definitions for abbreviation diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (unterminated quotes and text)
//! - E02xx: Structural errors (groups, attribute brackets)
//! - E03xx: Element errors (names, attributes, multipliers)
//! - E04xx: Operator errors (dangling operators, climbs)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character the grammar does not know
    E0101,
    /// Unterminated quoted attribute value
    E0102,
    /// Unterminated `{text}`
    E0103,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unclosed group `(`
    E0201,
    /// Unclosed attribute list `[`
    E0202,
    /// Unexpected `)`
    E0203,
    /// Empty group `()`
    E0204,
    /// Unexpected `]`
    E0205,

    // =========================================================================
    // E03xx: Element errors
    // =========================================================================
    /// Missing class name after `.`
    E0301,
    /// Missing id after `#`
    E0302,
    /// Missing attribute name
    E0303,
    /// Invalid repeat count
    E0304,
    /// Expected an element
    E0305,
    /// Repeat count above the maximum
    E0306,

    // =========================================================================
    // E04xx: Operator errors
    // =========================================================================
    /// Operator with nothing after it
    E0401,
    /// Operator with nothing before it
    E0402,
    /// Climb past the top level
    E0403,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Whitespace outside an attribute list or text
    E0902,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 => {
                "structural error"
            }
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306 => "element error",
            Self::E0401 | Self::E0402 | Self::E0403 => "operator error",
            Self::E0901 | Self::E0902 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated quoted value",
            Self::E0103 => "unterminated text",
            Self::E0201 => "unclosed group",
            Self::E0202 => "unclosed attribute list",
            Self::E0203 => "unexpected closing parenthesis",
            Self::E0204 => "empty group",
            Self::E0205 => "unexpected closing bracket",
            Self::E0301 => "missing class name",
            Self::E0302 => "missing id",
            Self::E0303 => "missing attribute name",
            Self::E0304 => "invalid repeat count",
            Self::E0305 => "expected element",
            Self::E0306 => "repeat count too large",
            Self::E0401 => "dangling operator",
            Self::E0402 => "operator without a preceding element",
            Self::E0403 => "climb past the top level",
            Self::E0901 => "unexpected token",
            Self::E0902 => "unexpected whitespace",
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205
        )
    }

    /// Check if more typing could still turn the input into a valid abbreviation.
    ///
    /// Unclosed delimiters and dangling operators are the normal state of an
    /// abbreviation while it is being typed.
    pub fn is_incomplete_input(&self) -> bool {
        matches!(
            self,
            Self::E0102 | Self::E0103 | Self::E0201 | Self::E0202 | Self::E0401
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
