//! Parse context tracking for context-aware error messages
//!
//! The parser keeps a stack of contexts so that an error can say where in
//! the abbreviation it happened ("in attribute list", "in group").

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// At the top level of the abbreviation
    #[default]
    TopLevel,
    /// Inside a parenthesized group
    Group,
    /// Reading the parts of one element (name, classes, id, text)
    Element,
    /// Inside an attribute list `[...]`
    Attributes,
    /// After a `*`
    Multiplier,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::Group => "in group",
            Self::Element => "in element",
            Self::Attributes => "in attribute list",
            Self::Multiplier => "in multiplier",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "an element, a group, or an operator ('>', '+', '^')",
            Self::Group => "an element, an operator, or ')'",
            Self::Element => "'.', '#', '[', '{', '*', or an operator",
            Self::Attributes => "an attribute name, '=', a value, or ']'",
            Self::Multiplier => "a repeat count",
        }
    }
}
