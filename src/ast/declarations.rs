use crate::Span;

use super::statements::CompoundStmt;

/// `TypeName Identifier '(' ParamList? ')' CompoundStatement`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<ParamDecl>,
    pub body: CompoundStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub type_name: String,
    pub name: String,
    pub span: Span,
}

/// A plain declaration such as `int a, b;`. Not produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub type_name: String,
    pub names: Vec<String>,
}
