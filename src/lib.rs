#![allow(clippy::module_inception)]

use crate::{ast::ast::TranslationUnit, errors::errors::{ErrorTip, SyntaxError}, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source buffer.
///
/// `offset` is a byte offset, `line` and `column` are 1-based and the column
/// is counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { offset: 0, line: 1, column: 1 }
    }
}

/// Half-open byte range `[start.offset, end.offset)` of the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Returns the slice of `source` covered by this span.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}

/// Tokenizes and parses a complete translation unit.
pub fn parse_source(source: &str) -> Result<TranslationUnit, SyntaxError> {
    parse(tokenize(source))
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a syntax error as a caret diagnostic:
///
/// ```text
/// Error: ExpectedTypeName (expected a type name, found Punctuator `{`)
/// -> main.c:1:11
///   |
/// 1 | int main( {
///   | ----------^
/// ```
pub fn render_error(error: &SyntaxError, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}:{}\n", file, position.line, position.column));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line(source, position.line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Prints [`render_error`] output to stdout.
pub fn display_error(error: &SyntaxError, source: &str, file: &str) {
    print!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (&string[start..], start)
}
