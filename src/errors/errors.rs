use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// The first syntax problem found while parsing. Parsing stops here.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at line {}, column {}", .token.line(), .token.column())]
pub struct SyntaxError {
    internal_error: ErrorImpl,
    token: Token,
}

impl SyntaxError {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        SyntaxError {
            internal_error: error_impl,
            token,
        }
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The token the parser was looking at when it gave up.
    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_position(&self) -> Position {
        self.token.span.start
    }

    pub fn line(&self) -> u32 {
        self.token.line()
    }

    pub fn column(&self) -> u32 {
        self.token.column()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedText { .. } => "UnexpectedText",
            ErrorImpl::ExpectedTypeName { .. } => "ExpectedTypeName",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found, token } => ErrorTip::Suggestion(format!(
                "expected {}, found {} `{}`",
                expected, found, token
            )),
            ErrorImpl::UnexpectedText { expected, found, token } => {
                let tip = format!("expected `{}`, found {} `{}`", expected, found, token);
                if expected == ";" {
                    ErrorTip::Suggestion(format!("{}, did you miss a semicolon?", tip))
                } else {
                    ErrorTip::Suggestion(tip)
                }
            }
            ErrorImpl::ExpectedTypeName { found, token } => ErrorTip::Suggestion(format!(
                "expected a type name, found {} `{}`",
                found, token
            )),
            ErrorImpl::ExpectedExpression { found, token } => ErrorTip::Suggestion(format!(
                "expected an expression, found {} `{}`",
                found, token
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected}, found {found} {token:?}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind, token: String },
    #[error("expected {expected:?}, found {found} {token:?}")]
    UnexpectedText { expected: String, found: TokenKind, token: String },
    #[error("expected type name, found {found} {token:?}")]
    ExpectedTypeName { found: TokenKind, token: String },
    #[error("expected expression, found {found} {token:?}")]
    ExpectedExpression { found: TokenKind, token: String },
    #[error("nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}
