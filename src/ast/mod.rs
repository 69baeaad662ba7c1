/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The translation unit root and the closed node enums
/// - declarations: Function definitions, declarations and parameters
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
