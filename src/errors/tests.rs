//! Unit tests for error handling.

use crate::errors::errors::{ErrorImpl, ErrorTip, SyntaxError};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};

fn token_at(kind: TokenKind, value: &str, line: u32, column: u32) -> Token {
    let start = Position { offset: 0, line, column };
    let end = Position { offset: value.len(), line, column: column + value.len() as u32 };

    Token { kind, value: value.to_string(), span: Span::new(start, end) }
}

#[test]
fn test_error_carries_token_position() {
    let error = SyntaxError::new(
        ErrorImpl::UnexpectedText {
            expected: ")".to_string(),
            found: TokenKind::Punctuator,
            token: "{".to_string(),
        },
        token_at(TokenKind::Punctuator, "{", 3, 14),
    );

    assert_eq!(error.line(), 3);
    assert_eq!(error.column(), 14);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_token().value, "{");
    assert_eq!(error.get_error_name(), "UnexpectedText");
}

#[test]
fn test_error_display() {
    let error = SyntaxError::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Keyword,
            token: "int".to_string(),
        },
        token_at(TokenKind::Keyword, "int", 1, 5),
    );

    assert_eq!(
        error.to_string(),
        "expected Identifier, found Keyword \"int\" at line 1, column 5"
    );
}

#[test]
fn test_expected_expression_display() {
    let error = SyntaxError::new(
        ErrorImpl::ExpectedExpression { found: TokenKind::Punctuator, token: ";".to_string() },
        token_at(TokenKind::Punctuator, ";", 2, 9),
    );

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(error.to_string(), "expected expression, found Punctuator \";\" at line 2, column 9");
}

#[test]
fn test_semicolon_tip() {
    let error = SyntaxError::new(
        ErrorImpl::UnexpectedText {
            expected: ";".to_string(),
            found: TokenKind::Punctuator,
            token: "}".to_string(),
        },
        token_at(TokenKind::Punctuator, "}", 1, 20),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.ends_with("did you miss a semicolon?")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_nesting_error_has_no_tip() {
    let error = SyntaxError::new(
        ErrorImpl::NestingTooDeep { limit: 4 },
        token_at(TokenKind::Punctuator, "(", 1, 5),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.to_string(), "nesting exceeds the limit of 4 at line 1, column 5");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let error = SyntaxError::new(
        ErrorImpl::ExpectedTypeName { found: TokenKind::Identifier, token: "x".to_string() },
        token_at(TokenKind::Identifier, "x", 1, 1),
    );

    takes_error(&error);
}
