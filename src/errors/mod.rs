//! Error types and error handling for the parser.
//!
//! This module defines the syntax error raised by the parser. It includes:
//!
//! - The error structure carrying the offending token and its position
//! - Specific error variants for each kind of failed expectation
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;
