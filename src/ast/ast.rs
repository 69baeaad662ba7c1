use crate::Span;

use super::{
    declarations::{Declaration, FunctionDef},
    expressions::{BinaryExpr, IdentifierExpr, LiteralExpr, UnaryExpr},
    statements::{CompoundStmt, ExpressionStmt, ForStmt, IfStmt, ReturnStmt, WhileStmt},
};

/// The root of a parsed source buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    pub declarations: Vec<ExternalDecl>,
}

impl TranslationUnit {
    /// Iterates the function definitions in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
        self.declarations.iter().filter_map(|decl| match decl {
            ExternalDecl::FunctionDef(function) => Some(function),
            ExternalDecl::Declaration(_) => None,
        })
    }

    /// Returns the first function definition called `name`.
    pub fn find_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions().find(|function| function.name == name)
    }
}

/// Top-level declarations.
///
/// Only function definitions are produced by the parser; `Declaration` is
/// kept as a data shape for consumers that build trees themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalDecl {
    FunctionDef(FunctionDef),
    Declaration(Declaration),
}

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    CompoundStmt,
    ExpressionStmt,
    ReturnStmt,
    IfStmt,
    WhileStmt,
    ForStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Compound(CompoundStmt),
    Expression(ExpressionStmt),
    Return(ReturnStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Compound(_) => StmtType::CompoundStmt,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::While(_) => StmtType::WhileStmt,
            Stmt::For(_) => StmtType::ForStmt,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Compound(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Binary,
    Unary,
    Literal,
    Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Binary(_) => ExprType::Binary,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Literal(_) => ExprType::Literal,
            Expr::Identifier(_) => ExprType::Identifier,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
        }
    }
}
