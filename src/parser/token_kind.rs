//! Token kinds produced by the abbreviation lexer
//!
//! The grammar has a small operator set, so every metacharacter gets its own
//! kind. Parsers match on kinds; the token text is only read for names,
//! numbers, attribute values and text.

/// All token kinds in an abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    // =========================================================================
    // NAMES AND LITERALS
    // =========================================================================
    Ident,        // div, input:text, my-class
    Number,       // 3
    Text,         // {free text}
    Quoted,       // "value" or 'value'

    // =========================================================================
    // OPERATORS
    // =========================================================================
    Gt,           // >  child
    Plus,         // +  sibling
    Caret,        // ^  climb
    Star,         // *  multiply
    LParen,       // (
    RParen,       // )
    Slash,        // /  self-closing

    // =========================================================================
    // ELEMENT PARTS
    // =========================================================================
    Dot,          // .class
    Hash,         // #id
    LBracket,     // [  attribute list open
    RBracket,     // ]  attribute list close
    Eq,           // =
    Minus,        // -
    Colon,        // :

    // =========================================================================
    // NUMBERING
    // =========================================================================
    Numbering,    // $#
    DollarEscape, // $$
    Dollar,       // $

    // =========================================================================
    // UNTERMINATED OPENERS
    // =========================================================================
    LBrace,       // {  without a matching }
    Quote,        // "  or ' without a matching quote

    // =========================================================================
    // OTHER
    // =========================================================================
    Whitespace,
    Literal,      // any character the grammar does not know
}

impl TokenKind {
    /// Check if this kind combines two elements (`>`, `+`, `^`)
    pub fn is_combinator(self) -> bool {
        matches!(self, Self::Gt | Self::Plus | Self::Caret)
    }

    /// Check if this kind can be part of a tag, class or id name
    pub fn is_name_part(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::Number
                | Self::Minus
                | Self::Colon
                | Self::Numbering
                | Self::DollarEscape
                | Self::Dollar
        )
    }

    /// Check if this kind can start an element
    pub fn starts_element(self) -> bool {
        self.is_name_part()
            || matches!(
                self,
                Self::Dot | Self::Hash | Self::LBracket | Self::Text | Self::LParen
            )
    }

    /// Human-readable description used in error messages
    pub fn describe(self) -> &'static str {
        match self {
            Self::Ident => "name",
            Self::Number => "number",
            Self::Text => "text",
            Self::Quoted => "quoted value",
            Self::Gt => "'>'",
            Self::Plus => "'+'",
            Self::Caret => "'^'",
            Self::Star => "'*'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Slash => "'/'",
            Self::Dot => "'.'",
            Self::Hash => "'#'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Eq => "'='",
            Self::Minus => "'-'",
            Self::Colon => "':'",
            Self::Numbering => "'$#'",
            Self::DollarEscape => "'$$'",
            Self::Dollar => "'$'",
            Self::LBrace => "'{'",
            Self::Quote => "quote",
            Self::Whitespace => "whitespace",
            Self::Literal => "character",
        }
    }
}
