use std::slice::Iter;

use crate::Span;

use super::ast::{Expr, Stmt};

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl CompoundStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// `Expression? ';'`. An empty statement has no expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// Every clause is optional. `init` is an expression statement, so it owns
/// the semicolon that ends it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub post: Option<Expr>,
    pub body: Box<Stmt>,
    pub span: Span,
}
