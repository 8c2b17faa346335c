//! Logos-based lexer for abbreviations
//!
//! Tokenization never fails: characters the grammar does not know become
//! [`TokenKind::Literal`] so the parser can report them with a position.

use super::token_kind::TokenKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Source range covered by this token
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Literal,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // =========================================================================
    // OPAQUE SPANS
    // =========================================================================
    #[regex(r"\{[^}]*\}")]
    Text,

    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    Quoted,

    #[token("{")]
    LBrace,

    #[token("\"")]
    #[token("'")]
    Quote,

    // =========================================================================
    // NAMES
    // =========================================================================
    #[regex(r"[A-Za-z_][A-Za-z0-9_:\-]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    // =========================================================================
    // NUMBERING (multi-character first)
    // =========================================================================
    #[token("$#")]
    Numbering,

    #[token("$$")]
    DollarEscape,

    #[token("$")]
    Dollar,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("^")]
    Caret,
    #[token("*")]
    Star,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("/")]
    Slash,
    #[token(".")]
    Dot,
    #[token("#")]
    Hash,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,
    #[token(":")]
    Colon,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => TokenKind::Whitespace,
            Text => TokenKind::Text,
            Quoted => TokenKind::Quoted,
            LBrace => TokenKind::LBrace,
            Quote => TokenKind::Quote,
            Ident => TokenKind::Ident,
            Number => TokenKind::Number,
            Numbering => TokenKind::Numbering,
            DollarEscape => TokenKind::DollarEscape,
            Dollar => TokenKind::Dollar,
            Gt => TokenKind::Gt,
            Plus => TokenKind::Plus,
            Caret => TokenKind::Caret,
            Star => TokenKind::Star,
            LParen => TokenKind::LParen,
            RParen => TokenKind::RParen,
            Slash => TokenKind::Slash,
            Dot => TokenKind::Dot,
            Hash => TokenKind::Hash,
            LBracket => TokenKind::LBracket,
            RBracket => TokenKind::RBracket,
            Eq => TokenKind::Eq,
            Minus => TokenKind::Minus,
            Colon => TokenKind::Colon,
        }
    }
}
