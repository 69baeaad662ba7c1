//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! token sequence into a [`TranslationUnit`](crate::ast::ast::TranslationUnit).
//! It handles:
//!
//! - Function definitions with parameter lists
//! - Statements (compound, expression, `return`, `if`/`else`, `while`, `for`)
//! - Expressions with layered operator precedence
//!
//! Statements are dispatched through a lookup table keyed by their leading
//! keyword or punctuator. Expressions use NUD (null denotation) and LED
//! (left denotation) handlers with a binding power per operator, which is
//! precedence climbing over the levels
//! assignment < equality < relational < additive < multiplicative.
//!
//! The first syntax error aborts the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
