use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, PUNCTUATORS, RESERVED_LOOKUP};

/// Handles one anchored match. Returns `None` for skipped input.
pub type RegexHandler = fn(&mut Lexer, &Captures) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).expect("token patterns are valid regexes"),
            handler,
        }
    }
}

lazy_static! {
    /// Tried in order at the cursor; the first pattern that matches wins.
    /// The punctuator pattern ends in a single-character fallback, so every
    /// non-empty remainder matches something.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"(?s)^/\*.*?(?:\*/|\z)", skip_handler),
        RegexPattern::new(r"^[\p{L}_][\p{L}\p{Nd}_]*", symbol_handler),
        RegexPattern::new(r"^(?:0[xX][0-9a-fA-F]*|0[0-7]*|[0-9]+)", number_handler),
        RegexPattern::new(r#"(?s)^"((?:\\.|\\\z|[^"\\])*)"?"#, string_handler),
        RegexPattern::new(r"(?s)^'((?:\\.|\\\z|[^'\\])*)'?", char_handler),
        RegexPattern::new(&punctuator_pattern(), punctuator_handler),
    ];
}

fn punctuator_pattern() -> String {
    let alternatives = PUNCTUATORS
        .iter()
        .map(|punct| regex::escape(punct))
        .collect::<Vec<String>>()
        .join("|");

    format!("(?s)^(?:{}|.)", alternatives)
}

/// A lazy, forward-only token stream over a source buffer.
///
/// Yields exactly one `EOF` token as its last item and then stays exhausted.
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    position: Position,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            position: Position::start(),
            finished: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.position.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    /// Moves the cursor past `text`, which must be the next slice of the source.
    pub fn advance_over(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.position.offset += text.len();
    }

    fn emit(&mut self, kind: TokenKind, value: String, matched: &str) -> Token {
        let start = self.position;
        self.advance_over(matched);

        MK_TOKEN!(kind, value, Span::new(start, self.position))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        'scan: while !self.at_eof() {
            let remainder = self.remainder();

            for pattern in PATTERNS.iter() {
                if let Some(captures) = pattern.regex.captures(remainder) {
                    match (pattern.handler)(self, &captures) {
                        Some(token) => return Some(token),
                        None => continue 'scan,
                    }
                }
            }

            // Unreachable while the punctuator fallback matches any character.
            break;
        }

        self.finished = true;
        Some(MK_TOKEN!(TokenKind::EOF, String::new(), Span::new(self.position, self.position)))
    }
}

impl FusedIterator for Lexer<'_> {}

fn matched<'h>(captures: &Captures<'h>, group: usize) -> &'h str {
    captures.get(group).map_or("", |m| m.as_str())
}

fn skip_handler(lexer: &mut Lexer, captures: &Captures) -> Option<Token> {
    lexer.advance_over(matched(captures, 0));
    None
}

fn symbol_handler(lexer: &mut Lexer, captures: &Captures) -> Option<Token> {
    let value = matched(captures, 0);

    let kind = if RESERVED_LOOKUP.contains(value) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    Some(lexer.emit(kind, String::from(value), value))
}

fn number_handler(lexer: &mut Lexer, captures: &Captures) -> Option<Token> {
    let value = matched(captures, 0);
    Some(lexer.emit(TokenKind::IntegerConstant, String::from(value), value))
}

// Escapes are copied verbatim; the quotes are part of the span but not the text.
fn string_handler(lexer: &mut Lexer, captures: &Captures) -> Option<Token> {
    let contents = matched(captures, 1);
    Some(lexer.emit(TokenKind::StringLiteral, String::from(contents), matched(captures, 0)))
}

fn char_handler(lexer: &mut Lexer, captures: &Captures) -> Option<Token> {
    let contents = matched(captures, 1);
    Some(lexer.emit(TokenKind::CharLiteral, String::from(contents), matched(captures, 0)))
}

fn punctuator_handler(lexer: &mut Lexer, captures: &Captures) -> Option<Token> {
    let value = matched(captures, 0);
    Some(lexer.emit(TokenKind::Punctuator, String::from(value), value))
}

/// Tokenizes the whole buffer. The last token is always `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
