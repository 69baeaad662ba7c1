//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts C source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and punctuators
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling
//!
//! The lexer never fails: unknown characters become single-character
//! punctuators and unterminated comments or literals stop at end of input.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
