use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        [
            "auto", "break", "case", "char", "const", "continue", "default", "do",
            "double", "else", "enum", "extern", "float", "for", "goto", "if",
            "int", "long", "register", "return", "short", "signed", "sizeof",
            "static", "struct", "switch", "typedef", "union", "unsigned",
            "void", "volatile", "while",
        ]
        .into_iter()
        .collect()
    };
}

/// Multi-character punctuators, tried in this order before falling back to
/// a single character.
pub const PUNCTUATORS: [&str; 23] = [
    "<<=", ">>=", "++", "--", "->", "&&", "||", "<=", ">=", "==", "!=", "<<", ">>",
    "+=", "-=", "*=", "/=", "%=", "&=", "^=", "|=", "::", "...",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// End of input. Always the last token, exactly once.
    EOF,
    Identifier,
    Keyword,
    IntegerConstant,
    StringLiteral,
    CharLiteral,
    Punctuator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Token text. Literals exclude their delimiting quotes; escapes are kept verbatim.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (L{},C{})", self.kind, self.value, self.line(), self.column())
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    /// True for a punctuator or keyword spelled exactly `text`.
    pub fn is(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Punctuator | TokenKind::Keyword) && self.value == text
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn debug(&self) {
        match self.kind {
            TokenKind::EOF => println!("{}:{} {} ()", self.line(), self.column(), self.kind),
            _ => println!("{}:{} {} ({})", self.line(), self.column(), self.kind, self.value),
        }
    }
}
