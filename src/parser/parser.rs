//! Recursive descent parser for abbreviations
//!
//! Precedence is encoded in the call structure:
//! `sequence` → `element` → (`group` | `node`) → `multiplier`.
//! A sequence is first read as a flat list of `(operator, element)` pairs and
//! then assembled into a subtree in one pass, so climbs are checked against
//! the depth reached at that point of the sequence.

use super::errors::{ErrorCode, ParseContext, ParseError, unexpected_in_context};
use super::lexer::{Token, tokenize};
use super::token_kind::TokenKind;
use crate::tree::{AbbreviationNode, NodeKind, Operator, Repeat};
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

/// Largest count a single `*N` multiplier may ask for
pub const MAX_REPEAT: usize = 1000;

/// Parse an abbreviation into a tree rooted at a [`NodeKind::Root`] node.
///
/// Leading and trailing whitespace is ignored; offsets in the tree and in
/// errors stay relative to `input`.
pub fn parse(input: &str) -> Result<AbbreviationNode, ParseError> {
    let tokens = tokenize(input);
    parse_tokens(&tokens)
}

/// Parse an already tokenized abbreviation
pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<AbbreviationNode, ParseError> {
    let is_content = |t: &Token<'_>| t.kind != TokenKind::Whitespace;
    let start = tokens.iter().position(is_content).unwrap_or(tokens.len());
    let end = tokens.iter().rposition(is_content).map_or(start, |i| i + 1);
    let tokens = &tokens[start..end];

    let mut parser = Parser::new(tokens);
    let mut root = AbbreviationNode::root();

    if parser.at_eof() {
        return Err(ParseError::at_offset(
            "empty abbreviation",
            TextSize::new(0),
            ErrorCode::E0305,
        ));
    }

    root.children = parser.parse_sequence()?;

    if let Some(token) = parser.current() {
        // parse_sequence only stops early at ')'
        return Err(ParseError::builder(ErrorCode::E0203)
            .message("unexpected ')' without a matching '('")
            .range(token.range())
            .build());
    }

    tracing::trace!(nodes = root.descendants().count(), "parsed abbreviation");
    Ok(root)
}

/// One element of a sequence together with the operator in front of it
struct Item {
    operator: Operator,
    operator_range: TextRange,
    node: AbbreviationNode,
}

/// The parser state
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    context: Vec<ParseContext>,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            context: vec![ParseContext::TopLevel],
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Offset of the current token, or the end of input
    fn offset(&self) -> TextSize {
        match self.current() {
            Some(token) => token.offset,
            None => self
                .tokens
                .last()
                .map(|t| t.range().end())
                .unwrap_or_else(|| TextSize::new(0)),
        }
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| t.range())
            .unwrap_or_else(|| TextRange::empty(self.offset()))
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn skip_whitespace(&mut self) {
        while self.at(TokenKind::Whitespace) {
            self.pos += 1;
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn context(&self) -> ParseContext {
        self.context.last().copied().unwrap_or_default()
    }

    fn unexpected(&self) -> ParseError {
        let Some(token) = self.current() else {
            return ParseError::at_offset("unexpected end of abbreviation", self.offset(), ErrorCode::E0305);
        };

        let code = match token.kind {
            TokenKind::Whitespace => ErrorCode::E0902,
            TokenKind::Literal => ErrorCode::E0101,
            TokenKind::RBracket => ErrorCode::E0205,
            TokenKind::LBrace => return self.unterminated_text(token),
            TokenKind::Quote => return self.unterminated_quote(token),
            _ => ErrorCode::E0901,
        };

        let found = match token.kind {
            TokenKind::Ident | TokenKind::Number | TokenKind::Literal => format!("'{}'", token.text),
            kind => kind.describe().to_string(),
        };
        unexpected_in_context(&found, token.range(), self.context(), code)
    }

    fn unterminated_text(&self, token: &Token<'_>) -> ParseError {
        ParseError::builder(ErrorCode::E0103)
            .message("unterminated text, missing '}'")
            .at_offset(self.tokens.last().map(|t| t.range().end()).unwrap_or(token.offset))
            .related("text opened here", token.range())
            .hint("close the text with '}'")
            .build()
    }

    fn unterminated_quote(&self, token: &Token<'_>) -> ParseError {
        ParseError::builder(ErrorCode::E0102)
            .message(format!("unterminated quoted value, missing {}", token.text))
            .at_offset(self.tokens.last().map(|t| t.range().end()).unwrap_or(token.offset))
            .related("quote opened here", token.range())
            .build()
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// sequence = element (operator element)*
    fn parse_sequence(&mut self) -> Result<Vec<AbbreviationNode>, ParseError> {
        let mut items = Vec::new();
        let mut operator = Operator::Child;
        let mut operator_range = TextRange::empty(self.offset());

        loop {
            if !self.current_kind().is_some_and(TokenKind::starts_element) {
                return Err(self.missing_element(&items, operator, operator_range));
            }

            let node = self.parse_element()?;
            items.push(Item {
                operator,
                operator_range,
                node,
            });

            let start = self.offset();
            operator = match self.current_kind() {
                None | Some(TokenKind::RParen) => break,
                Some(TokenKind::Gt) => {
                    self.bump();
                    Operator::Child
                }
                Some(TokenKind::Plus) => {
                    self.bump();
                    Operator::Sibling
                }
                Some(TokenKind::Caret) => {
                    let mut count = 0;
                    while self.at(TokenKind::Caret) {
                        self.bump();
                        count += 1;
                    }
                    Operator::Climb(count)
                }
                Some(_) => return Err(self.unexpected()),
            };
            operator_range = TextRange::new(start, self.offset());
        }

        assemble(items)
    }

    /// Error for a position where an element is required but missing
    fn missing_element(&self, items: &[Item], operator: Operator, operator_range: TextRange) -> ParseError {
        match self.current_kind() {
            Some(kind) if kind.is_combinator() && items.is_empty() => {
                ParseError::builder(ErrorCode::E0402)
                    .message(format!("{} has no element before it", kind.describe()))
                    .range(self.current_range())
                    .build()
            }
            None | Some(TokenKind::RParen) if !items.is_empty() => {
                ParseError::builder(ErrorCode::E0401)
                    .message(format!("{} must be followed by an element", describe_operator(operator)))
                    .range(operator_range)
                    .build()
            }
            Some(TokenKind::RParen) => ParseError::builder(ErrorCode::E0203)
                .message("unexpected ')'")
                .range(self.current_range())
                .build(),
            _ => self.unexpected(),
        }
    }

    /// element = (group | node) multiplier?
    ///
    /// A node reads its own multiplier so that parts may follow it:
    /// `li*3{item $#}`.
    fn parse_element(&mut self) -> Result<AbbreviationNode, ParseError> {
        if !self.at(TokenKind::LParen) {
            return self.parse_node();
        }

        let mut group = self.parse_group()?;
        if self.at(TokenKind::Star) {
            group.repeat = self.parse_multiplier()?;
        }
        Ok(group)
    }

    /// group = '(' sequence ')'
    fn parse_group(&mut self) -> Result<AbbreviationNode, ParseError> {
        let open = match self.bump() {
            Some(token) => token.range(),
            None => return Err(self.unexpected()),
        };
        let mut group = AbbreviationNode::group(open.start());

        if self.at(TokenKind::RParen) {
            return Err(ParseError::builder(ErrorCode::E0204)
                .message("empty group '()'")
                .range(TextRange::new(open.start(), self.current_range().end()))
                .build());
        }

        self.context.push(ParseContext::Group);
        group.children = self.parse_sequence()?;
        self.context.pop();

        if !self.at(TokenKind::RParen) {
            return Err(ParseError::builder(ErrorCode::E0201)
                .message("unclosed group, missing ')'")
                .at_offset(self.offset())
                .related("group opened here", open)
                .hint("add ')' to close the group")
                .build());
        }
        self.bump();
        Ok(group)
    }

    /// multiplier = '*' NUMBER?
    fn parse_multiplier(&mut self) -> Result<Repeat, ParseError> {
        self.bump();
        if !self.at(TokenKind::Number) {
            return Ok(Repeat::Implicit);
        }

        self.context.push(ParseContext::Multiplier);
        let token = self.bump().ok_or_else(|| self.unexpected())?;
        let count = match token.text.parse::<usize>() {
            Ok(0) => {
                return Err(ParseError::builder(ErrorCode::E0304)
                    .message(format!("repeat count must be at least 1, found '{}'", token.text))
                    .range(token.range())
                    .build());
            }
            Ok(count) if count <= MAX_REPEAT => count,
            // digits only, so parsing fails on overflow alone
            _ => {
                return Err(ParseError::builder(ErrorCode::E0306)
                    .message(format!(
                        "repeat count '{}' exceeds the maximum of {}",
                        token.text, MAX_REPEAT
                    ))
                    .range(token.range())
                    .build());
            }
        };
        self.context.pop();
        Ok(Repeat::Count(count))
    }

    /// node = name? ('.' name | '#' name | attributes | TEXT | multiplier)* '/'?
    fn parse_node(&mut self) -> Result<AbbreviationNode, ParseError> {
        let mut node = AbbreviationNode::element(self.offset());
        let mut multiplied = false;
        self.context.push(ParseContext::Element);

        if self.current_kind().is_some_and(TokenKind::is_name_part) {
            node.name = Some(SmolStr::new(self.read_name()));
        }

        loop {
            match self.current_kind() {
                Some(TokenKind::Dot) => {
                    let dot = self.current_range();
                    self.bump();
                    let class = self.read_name();
                    if class.is_empty() {
                        return Err(ParseError::new("missing class name after '.'", dot, ErrorCode::E0301)
                            .with_hint("write a class name after '.'"));
                    }
                    node.add_class(class);
                }
                Some(TokenKind::Hash) => {
                    let hash = self.current_range();
                    self.bump();
                    let id = self.read_name();
                    if id.is_empty() {
                        return Err(ParseError::new("missing id after '#'", hash, ErrorCode::E0302));
                    }
                    node.attributes.insert("id".to_string(), id);
                }
                Some(TokenKind::LBracket) => self.parse_attributes(&mut node)?,
                Some(TokenKind::Star) if !multiplied => {
                    node.repeat = self.parse_multiplier()?;
                    multiplied = true;
                }
                Some(TokenKind::Text) => {
                    let token = self.bump().ok_or_else(|| self.unexpected())?;
                    let inner = &token.text[1..token.text.len() - 1];
                    match &mut node.text {
                        Some(text) => text.push_str(inner),
                        None => node.text = Some(inner.to_string()),
                    }
                }
                Some(TokenKind::LBrace) => {
                    let token = self.bump().ok_or_else(|| self.unexpected())?;
                    return Err(self.unterminated_text(token));
                }
                _ => break,
            }
        }

        if self.at(TokenKind::Slash) {
            self.bump();
            node.self_closing = true;
        }

        self.context.pop();
        Ok(node)
    }

    /// Concatenate adjacent name tokens: `item-$#`, `h1`, `input:text`
    fn read_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(token) = self.current().filter(|t| t.kind.is_name_part()) {
            name.push_str(token.text);
            self.pos += 1;
        }
        name
    }

    /// attributes = '[' (attr (WS attr)*)? ']'
    fn parse_attributes(&mut self, node: &mut AbbreviationNode) -> Result<(), ParseError> {
        let open = self.current_range();
        self.bump();
        self.context.push(ParseContext::Attributes);

        loop {
            self.skip_whitespace();
            match self.current_kind() {
                Some(TokenKind::RBracket) => {
                    self.bump();
                    break;
                }
                None => {
                    return Err(ParseError::builder(ErrorCode::E0202)
                        .message("unclosed attribute list, missing ']'")
                        .at_offset(self.offset())
                        .related("attribute list opened here", open)
                        .hint("add ']' to close the attribute list")
                        .build());
                }
                Some(TokenKind::Quote) => {
                    let token = self.bump().ok_or_else(|| self.unexpected())?;
                    return Err(self.unterminated_quote(token));
                }
                Some(TokenKind::Eq) | Some(TokenKind::Quoted) | Some(TokenKind::LBracket) => {
                    return Err(ParseError::builder(ErrorCode::E0303)
                        .message(format!(
                            "missing attribute name before {}",
                            self.current_kind().map(TokenKind::describe).unwrap_or("end")
                        ))
                        .range(self.current_range())
                        .build());
                }
                Some(_) => {
                    let (key, value) = self.parse_attribute()?;
                    if key == "class" {
                        for class in value.split_whitespace() {
                            node.add_class(class);
                        }
                    } else {
                        node.attributes.insert(key, value);
                    }
                }
            }
        }

        self.context.pop();
        Ok(())
    }

    /// attr = key ('=' (QUOTED | unquoted))?
    fn parse_attribute(&mut self) -> Result<(String, String), ParseError> {
        let key = self.read_raw(&[
            TokenKind::Whitespace,
            TokenKind::Eq,
            TokenKind::RBracket,
            TokenKind::LBracket,
            TokenKind::Quoted,
            TokenKind::Quote,
        ]);

        if !self.at(TokenKind::Eq) {
            return Ok((key, String::new()));
        }
        self.bump();

        let value = match self.current_kind() {
            Some(TokenKind::Quoted) => {
                let token = self.bump().ok_or_else(|| self.unexpected())?;
                token.text[1..token.text.len() - 1].to_string()
            }
            Some(TokenKind::Quote) => {
                let token = self.bump().ok_or_else(|| self.unexpected())?;
                return Err(self.unterminated_quote(token));
            }
            _ => self.read_raw(&[TokenKind::Whitespace, TokenKind::RBracket]),
        };
        Ok((key, value))
    }

    /// Concatenate raw token text until one of `stop` or end of input
    fn read_raw(&mut self, stop: &[TokenKind]) -> String {
        let mut text = String::new();
        while let Some(token) = self.current().filter(|t| !stop.contains(&t.kind)) {
            text.push_str(token.text);
            self.pos += 1;
        }
        text
    }
}

fn describe_operator(operator: Operator) -> String {
    match operator {
        Operator::Child => "'>'".to_string(),
        Operator::Sibling => "'+'".to_string(),
        Operator::Climb(n) => format!("'{}'", "^".repeat(n)),
    }
}

/// Children vector at `path` below `roots`
fn container<'n>(
    roots: &'n mut Vec<AbbreviationNode>,
    path: &[usize],
) -> &'n mut Vec<AbbreviationNode> {
    let mut current = roots;
    for &index in path {
        current = &mut current[index].children;
    }
    current
}

/// Build the subtree of one sequence from its `(operator, element)` pairs.
///
/// `path` always points at the children vector the next element goes into.
/// `>` descends into the last element placed there, `+` stays, and `^`×n
/// leaves n levels. A node placed at depth d (1 = top level of this
/// sequence) allows at most d carets; exactly d lands at the top level.
fn assemble(items: Vec<Item>) -> Result<Vec<AbbreviationNode>, ParseError> {
    let mut roots = Vec::new();
    let mut path: Vec<usize> = Vec::new();

    for Item {
        operator,
        operator_range,
        mut node,
    } in items
    {
        match operator {
            Operator::Child => {
                let len = container(&mut roots, &path).len();
                if len > 0 {
                    path.push(len - 1);
                }
            }
            Operator::Sibling => {}
            Operator::Climb(count) => {
                let depth = path.len() + 1;
                if count > depth {
                    return Err(ParseError::builder(ErrorCode::E0403)
                        .message(format!(
                            "cannot climb {} levels from depth {}",
                            count, depth
                        ))
                        .range(operator_range)
                        .hint(format!("use at most {} '^'", depth))
                        .build());
                }
                for _ in 0..count.min(path.len()) {
                    path.pop();
                }
            }
        }

        node.operator = operator;
        container(&mut roots, &path).push(node);
    }

    debug_assert!(roots.iter().all(|n| n.kind != NodeKind::Root));
    Ok(roots)
}
