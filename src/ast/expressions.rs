use crate::Span;

use super::ast::Expr;

/// Binary Expression
/// Also used for assignment, with operator `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Prefix Expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Literal Expression
/// Holds the integer constant exactly as written (`42`, `0x1A`, `017`).
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}
