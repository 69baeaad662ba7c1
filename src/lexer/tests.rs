//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer constants (decimal, octal, hexadecimal)
//! - String and char literals with verbatim escapes
//! - Punctuators and longest match
//! - Comments and whitespace
//! - Line/column tracking and spans

use super::{
    lexer::{tokenize, Lexer},
    tokens::{TokenKind, PUNCTUATORS},
};

fn kinds_and_values(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "");
    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
}

#[test]
fn test_tokenize_only_whitespace_and_comments() {
    let source = "  \t\n// line comment\n/* block\n comment */  \r\n";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start.offset, source.len());
}

#[test]
fn test_tokenize_keywords() {
    let source = "auto break case char const continue default do double else enum extern \
                  float for goto if int long register return short signed sizeof static \
                  struct switch typedef union unsigned void volatile while";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 33);
    for token in &tokens[..32] {
        assert_eq!(token.kind, TokenKind::Keyword, "{}", token.value);
    }
    assert_eq!(tokens[32].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = kinds_and_values("foo _bar baz_123 Int main2 returnValue");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Identifier, "foo".to_string()),
            (TokenKind::Identifier, "_bar".to_string()),
            (TokenKind::Identifier, "baz_123".to_string()),
            (TokenKind::Identifier, "Int".to_string()),
            (TokenKind::Identifier, "main2".to_string()),
            (TokenKind::Identifier, "returnValue".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_tokenize_integer_constants() {
    let tokens = kinds_and_values("123 0x1A 0X7f 017 0 42");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::IntegerConstant, "123".to_string()),
            (TokenKind::IntegerConstant, "0x1A".to_string()),
            (TokenKind::IntegerConstant, "0X7f".to_string()),
            (TokenKind::IntegerConstant, "017".to_string()),
            (TokenKind::IntegerConstant, "0".to_string()),
            (TokenKind::IntegerConstant, "42".to_string()),
            (TokenKind::EOF, String::new()),
        ]
    );
}

#[test]
fn test_tokenize_single_integer_constants() {
    for source in ["123", "0x1A", "017"] {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::IntegerConstant);
        assert_eq!(tokens[0].value, source);
    }
}

#[test]
fn test_octal_stops_at_non_octal_digit() {
    let tokens = kinds_and_values("089");

    assert_eq!(tokens[0], (TokenKind::IntegerConstant, "0".to_string()));
    assert_eq!(tokens[1], (TokenKind::IntegerConstant, "89".to_string()));
}

#[test]
fn test_integer_has_no_sign_or_suffix() {
    let tokens = kinds_and_values("-5 10u");

    assert_eq!(tokens[0], (TokenKind::Punctuator, "-".to_string()));
    assert_eq!(tokens[1], (TokenKind::IntegerConstant, "5".to_string()));
    assert_eq!(tokens[2], (TokenKind::IntegerConstant, "10".to_string()));
    assert_eq!(tokens[3], (TokenKind::Identifier, "u".to_string()));
}

#[test]
fn test_tokenize_strings() {
    let tokens = kinds_and_values(r#""hello" "two words" """#);

    assert_eq!(tokens[0], (TokenKind::StringLiteral, "hello".to_string()));
    assert_eq!(tokens[1], (TokenKind::StringLiteral, "two words".to_string()));
    assert_eq!(tokens[2], (TokenKind::StringLiteral, String::new()));
    assert_eq!(tokens[3].0, TokenKind::EOF);
}

#[test]
fn test_string_escapes_are_verbatim() {
    let tokens = kinds_and_values(r#""a\nb" "quote\"inside" "\q""#);

    assert_eq!(tokens[0].1, r"a\nb");
    assert_eq!(tokens[1].1, r#"quote\"inside"#);
    assert_eq!(tokens[2].1, r"\q");
}

#[test]
fn test_tokenize_char_literals() {
    let tokens = kinds_and_values(r"'a' '\'' '\\' 'ab'");

    assert_eq!(tokens[0], (TokenKind::CharLiteral, "a".to_string()));
    assert_eq!(tokens[1], (TokenKind::CharLiteral, r"\'".to_string()));
    assert_eq!(tokens[2], (TokenKind::CharLiteral, r"\\".to_string()));
    assert_eq!(tokens[3], (TokenKind::CharLiteral, "ab".to_string()));
}

#[test]
fn test_unterminated_literals_truncate_at_eof() {
    let tokens = kinds_and_values("x = \"never closed\n;");
    assert_eq!(tokens[2], (TokenKind::StringLiteral, "never closed\n;".to_string()));
    assert_eq!(tokens[3].0, TokenKind::EOF);
    assert_eq!(tokens.len(), 4);

    let tokens = kinds_and_values("'a");
    assert_eq!(tokens[0], (TokenKind::CharLiteral, "a".to_string()));
    assert_eq!(tokens[1].0, TokenKind::EOF);

    let tokens = kinds_and_values("\"trailing\\");
    assert_eq!(tokens[0], (TokenKind::StringLiteral, "trailing\\".to_string()));
    assert_eq!(tokens[1].0, TokenKind::EOF);
}

#[test]
fn test_unterminated_block_comment_consumes_rest() {
    let tokens = kinds_and_values("a /* b c");

    assert_eq!(tokens, vec![(TokenKind::Identifier, "a".to_string()), (TokenKind::EOF, String::new())]);
}

#[test]
fn test_block_comment_ends_at_first_terminator() {
    let tokens = kinds_and_values("/* a */ b /* c */");

    assert_eq!(tokens, vec![(TokenKind::Identifier, "b".to_string()), (TokenKind::EOF, String::new())]);
}

#[test]
fn test_tokenize_multi_char_punctuators() {
    let source = PUNCTUATORS.join(" ");
    let tokens = tokenize(&source);

    assert_eq!(tokens.len(), PUNCTUATORS.len() + 1);
    for (token, punct) in tokens.iter().zip(PUNCTUATORS.iter()) {
        assert_eq!(token.kind, TokenKind::Punctuator);
        assert_eq!(token.value, *punct);
    }
}

#[test]
fn test_punctuator_longest_match() {
    let values: Vec<String> = tokenize("a<<=b>>c+++d...e->f")
        .into_iter()
        .filter(|token| token.kind == TokenKind::Punctuator)
        .map(|token| token.value)
        .collect();

    assert_eq!(values, vec!["<<=", ">>", "++", "+", "...", "->"]);
}

#[test]
fn test_unrecognized_characters_become_punctuators() {
    let tokens = kinds_and_values("@ # $ ..");

    assert_eq!(tokens[0], (TokenKind::Punctuator, "@".to_string()));
    assert_eq!(tokens[1], (TokenKind::Punctuator, "#".to_string()));
    assert_eq!(tokens[2], (TokenKind::Punctuator, "$".to_string()));
    assert_eq!(tokens[3], (TokenKind::Punctuator, ".".to_string()));
    assert_eq!(tokens[4], (TokenKind::Punctuator, ".".to_string()));
    assert_eq!(tokens[5].0, TokenKind::EOF);
}

#[test]
fn test_slash_is_not_a_comment() {
    let tokens = kinds_and_values("a / b /= c");

    assert_eq!(tokens[1], (TokenKind::Punctuator, "/".to_string()));
    assert_eq!(tokens[3], (TokenKind::Punctuator, "/=".to_string()));
}

#[test]
fn test_line_and_column_tracking() {
    let source = "int main() {\n  return 0;\n}\n";
    let positions: Vec<(String, u32, u32)> = tokenize(source)
        .into_iter()
        .map(|token| (token.value.clone(), token.line(), token.column()))
        .collect();

    assert_eq!(
        positions,
        vec![
            ("int".to_string(), 1, 1),
            ("main".to_string(), 1, 5),
            ("(".to_string(), 1, 9),
            (")".to_string(), 1, 10),
            ("{".to_string(), 1, 12),
            ("return".to_string(), 2, 3),
            ("0".to_string(), 2, 10),
            (";".to_string(), 2, 11),
            ("}".to_string(), 3, 1),
            (String::new(), 4, 1),
        ]
    );
}

#[test]
fn test_positions_after_multiline_comment_and_string() {
    let tokens = tokenize("/* one\ntwo */ x \"a\nb\" y");

    assert_eq!((tokens[0].value.as_str(), tokens[0].line(), tokens[0].column()), ("x", 2, 8));
    assert_eq!((tokens[1].line(), tokens[1].column()), (2, 10));
    assert_eq!((tokens[2].value.as_str(), tokens[2].line(), tokens[2].column()), ("y", 3, 4));
}

#[test]
fn test_positions_are_monotonic() {
    let source = "int f(int a, int b)\n{\n\tif (a >= b) return a; /* x */ else\n return b;\n}";
    let tokens = tokenize(source);

    for pair in tokens.windows(2) {
        let (a, b) = (pair[0].span.start, pair[1].span.start);
        assert!((a.line, a.column) <= (b.line, b.column));
        assert!(a.offset <= b.offset);
    }
}

#[test]
fn test_span_round_trip() {
    let source = "int main(){ x <<= 0x1F; s = \"a\\\"b\"; c = '\\n'; /* c */ return 017 ... }";
    let tokens = tokenize(source);

    for token in tokens.iter().filter(|token| !token.is_eof()) {
        let retokenized = tokenize(token.span.slice(source));

        assert_eq!(retokenized.len(), 2, "{}", token);
        assert_eq!(retokenized[0].kind, token.kind);
        assert_eq!(retokenized[0].value, token.value);
        assert!(retokenized[1].is_eof());
    }
}

#[test]
fn test_lexer_is_lazy_and_fused() {
    let mut lexer = Lexer::new("a b");

    assert_eq!(lexer.next().map(|token| token.value), Some("a".to_string()));
    assert_eq!(lexer.position().column, 2);
    assert_eq!(lexer.next().map(|token| token.value), Some("b".to_string()));
    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::EOF));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_unicode_identifiers_and_columns() {
    let tokens = tokenize("é = ü2;");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[1].column(), 3);
    assert_eq!(tokens[2].value, "ü2");
    assert_eq!(tokens[3].column(), 7);
}

#[test]
fn test_identifiers_take_only_decimal_digits() {
    let tokens = tokenize("x\u{b2} y\u{2167}");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Punctuator);
    assert_eq!(tokens[1].value, "\u{b2}");
    assert_eq!(tokens[2].value, "y");
    assert_eq!(tokens[3].kind, TokenKind::Punctuator);
    assert_eq!(tokens[3].column(), 5);

    let tokens = tokenize("v\u{663}");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "v\u{663}");
}
