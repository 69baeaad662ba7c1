use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::SyntaxError,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, SyntaxError>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, SyntaxError>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, SyntaxError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Right associative
    parser.led("=", BindingPower::Assignment, parse_assignment_expr);

    // Equality
    parser.led("==", BindingPower::Equality, parse_binary_expr);
    parser.led("!=", BindingPower::Equality, parse_binary_expr);

    // Relational
    parser.led("<", BindingPower::Relational, parse_binary_expr);
    parser.led("<=", BindingPower::Relational, parse_binary_expr);
    parser.led(">", BindingPower::Relational, parse_binary_expr);
    parser.led(">=", BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led("+", BindingPower::Additive, parse_binary_expr);
    parser.led("-", BindingPower::Additive, parse_binary_expr);
    parser.led("*", BindingPower::Multiplicative, parse_binary_expr);
    parser.led("/", BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    parser.nud_kind(TokenKind::IntegerConstant, parse_primary_expr);
    parser.nud_kind(TokenKind::Identifier, parse_primary_expr);
    parser.nud("(", parse_grouping_expr);

    // Statements
    parser.stmt("return", parse_return_stmt);
    parser.stmt("{", parse_block_stmt);
    parser.stmt("if", parse_if_stmt);
    parser.stmt("while", parse_while_stmt);
    parser.stmt("for", parse_for_stmt);
}

// Lookup tables inside parser struct, so each parser owns its own
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type TextNUDLookup = HashMap<&'static str, NUDHandler>;
pub type KindNUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<&'static str, LEDHandler>;
pub type BPLookup = HashMap<&'static str, BindingPower>;
