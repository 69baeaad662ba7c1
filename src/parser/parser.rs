//! Parser state and token cursor.
//!
//! This module contains the main Parser struct and the entry point
//! [`parse`]. The parser holds the materialized token sequence, a forward-only
//! cursor into it, and lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::ast::{ExternalDecl, TranslationUnit},
    errors::errors::{ErrorImpl, SyntaxError},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, KindNUDLookup, LEDHandler, LEDLookup,
        NUDHandler, StmtHandler, StmtLookup, TextNUDLookup,
    },
    stmt::parse_function_def,
};

/// Default limit for nested statements and expressions.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The token sequence; always ends in exactly one `EOF`
    tokens: Vec<Token>,
    /// Index of the current token, never past the final `EOF`
    pos: usize,
    /// End of the most recently consumed token
    last_end: Position,
    /// Current nesting of statements and sub-expressions
    depth: usize,
    max_depth: usize,
    /// Statement handlers keyed by leading keyword or punctuator
    stmt_lookup: StmtLookup,
    /// Prefix handlers keyed by punctuator text
    text_nud_lookup: TextNUDLookup,
    /// Prefix handlers keyed by token kind
    kind_nud_lookup: KindNUDLookup,
    /// Infix handlers keyed by operator text
    led_lookup: LEDLookup,
    /// Binding power of each infix operator
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over `tokens`.
    ///
    /// The sequence is materialized. If it does not end in an `EOF` token one
    /// is appended, so lookahead always has an end marker to clamp to.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut tokens: Vec<Token> = tokens.into_iter().collect();

        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map_or(Position::start(), |token| token.span.end);
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span::new(end, end)));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            last_end: Position::start(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            stmt_lookup: HashMap::new(),
            text_nud_lookup: HashMap::new(),
            kind_nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Sets the nesting limit. Deeper input fails with `NestingTooDeep`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the token `offset` places ahead, clamped to the final `EOF`.
    pub fn peek(&self, offset: usize) -> &Token {
        let index = self.pos.saturating_add(offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the consumed one.
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }

        let token = &self.tokens[index];
        self.last_end = token.span.end;
        token
    }

    /// True if the current token is the punctuator or keyword `text`.
    pub fn check(&self, text: &str) -> bool {
        self.current_token().is(text)
    }

    /// Consumes the current token if it is the punctuator or keyword `text`.
    pub fn match_text(&mut self, text: &str) -> bool {
        if self.check(text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `UnexpectedToken` error at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, SyntaxError> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(self.error(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: token.kind,
                token: token.value.clone(),
            }));
        }

        Ok(self.advance().clone())
    }

    /// Expects the punctuator or keyword spelled `text`.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `UnexpectedText` error at the current token.
    pub fn expect_text(&mut self, text: &str) -> Result<Token, SyntaxError> {
        let token = self.current_token();
        if !token.is(text) {
            return Err(self.error(ErrorImpl::UnexpectedText {
                expected: String::from(text),
                found: token.kind,
                token: token.value.clone(),
            }));
        }

        Ok(self.advance().clone())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.current_token().is_eof()
    }

    /// Builds an error pointing at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> SyntaxError {
        SyntaxError::new(error_impl, self.current_token().clone())
    }

    /// Runs `parse_fn` one nesting level deeper.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ErrorImpl::NestingTooDeep { limit: self.max_depth }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Span from `start` to the end of the last consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.last_end)
    }

    fn lookup_text(&self) -> Option<&str> {
        let token = self.current_token();
        match token.kind {
            TokenKind::Punctuator | TokenKind::Keyword => Some(token.value.as_str()),
            _ => None,
        }
    }

    /// Statement handler for the current token, if it starts a dedicated statement form.
    pub fn stmt_handler(&self) -> Option<StmtHandler> {
        self.lookup_text()
            .and_then(|text| self.stmt_lookup.get(text))
            .copied()
    }

    /// Prefix handler for the current token.
    pub fn nud_handler(&self) -> Option<NUDHandler> {
        self.lookup_text()
            .and_then(|text| self.text_nud_lookup.get(text))
            .or_else(|| self.kind_nud_lookup.get(&self.current_token_kind()))
            .copied()
    }

    /// Infix handler and binding power for the current token, if it is a binary operator.
    pub fn led_handler(&self) -> Option<(LEDHandler, BindingPower)> {
        let text = self.lookup_text()?;
        let handler = self.led_lookup.get(text)?;
        let binding_power = self.binding_power_lookup.get(text)?;

        Some((*handler, *binding_power))
    }

    /// Registers a left denotation (infix) handler for an operator.
    pub fn led(&mut self, operator: &'static str, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(operator, binding_power);
        self.led_lookup.insert(operator, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a punctuator.
    pub fn nud(&mut self, text: &'static str, nud_fn: NUDHandler) {
        self.text_nud_lookup.insert(text, nud_fn);
    }

    /// Registers a null denotation handler for every token of `kind`.
    pub fn nud_kind(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.kind_nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a leading keyword or punctuator.
    pub fn stmt(&mut self, text: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(text, stmt_fn);
    }

    /// `TranslationUnit = ExternalDeclaration* EndOfInput`
    pub fn parse_translation_unit(&mut self) -> Result<TranslationUnit, SyntaxError> {
        let mut declarations = vec![];

        while self.has_tokens() {
            declarations.push(ExternalDecl::FunctionDef(parse_function_def(self)?));
        }

        Ok(TranslationUnit { declarations })
    }
}

/// Parses a token sequence into a translation unit.
///
/// This is the main entry point for parsing. The first syntax error is
/// returned and no partial tree is produced.
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<TranslationUnit, SyntaxError> {
    Parser::new(tokens).parse_translation_unit()
}
