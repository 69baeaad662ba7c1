use crate::{
    ast::{
        ast::Stmt,
        declarations::{FunctionDef, ParamDecl},
        statements::{CompoundStmt, ExpressionStmt, ForStmt, IfStmt, ReturnStmt, WhileStmt},
    },
    errors::errors::{ErrorImpl, SyntaxError},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    parser.nested(|parser| match parser.stmt_handler() {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    })
}

/// `Expression? ';'`
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let start = parser.get_position();

    let expression = if parser.match_text(";") {
        None
    } else {
        let expr = parse_expr(parser, BindingPower::Default)?;
        parser.expect_text(";")?;
        Some(expr)
    };

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        span: parser.span_from(start),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let start = parser.advance().span.start;

    let value = if parser.match_text(";") {
        None
    } else {
        let expr = parse_expr(parser, BindingPower::Default)?;
        parser.expect_text(";")?;
        Some(expr)
    };

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: parser.span_from(start),
    }))
}

/// `'{' Statement* '}'`
pub fn parse_compound_stmt(parser: &mut Parser) -> Result<CompoundStmt, SyntaxError> {
    let start = parser.expect_text("{")?.span.start;

    let mut statements = Vec::new();
    while !parser.match_text("}") {
        statements.push(parse_stmt(parser)?);
    }

    Ok(CompoundStmt {
        body: statements,
        span: parser.span_from(start),
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    Ok(Stmt::Compound(parse_compound_stmt(parser)?))
}

/// A trailing `else` binds to the nearest `if`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let start = parser.advance().span.start;

    parser.expect_text("(")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_text(")")?;

    let then_body = parse_stmt(parser)?;

    let else_body = if parser.match_text("else") {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body,
        span: parser.span_from(start),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let start = parser.advance().span.start;

    parser.expect_text("(")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_text(")")?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
        span: parser.span_from(start),
    }))
}

/// `for '(' ExpressionStatement? ';'? Expression? ';' Expression? ')' Statement`
///
/// A present init clause is an expression statement and consumes its own `;`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let start = parser.advance().span.start;

    parser.expect_text("(")?;

    let init = if parser.match_text(";") {
        None
    } else {
        Some(Box::new(parse_expression_stmt(parser)?))
    };

    let condition = if parser.match_text(";") {
        None
    } else {
        let expr = parse_expr(parser, BindingPower::Default)?;
        parser.expect_text(";")?;
        Some(expr)
    };

    let post = if parser.match_text(")") {
        None
    } else {
        let expr = parse_expr(parser, BindingPower::Default)?;
        parser.expect_text(")")?;
        Some(expr)
    };

    let body = parse_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        post,
        body: Box::new(body),
        span: parser.span_from(start),
    }))
}

/// A type name is a single keyword, e.g. `int` or `void`.
pub fn parse_type_name(parser: &mut Parser) -> Result<String, SyntaxError> {
    let token = parser.current_token();
    if token.kind != TokenKind::Keyword {
        return Err(parser.error(ErrorImpl::ExpectedTypeName {
            found: token.kind,
            token: token.value.clone(),
        }));
    }

    Ok(parser.advance().value.clone())
}

fn parse_param_decl(parser: &mut Parser) -> Result<ParamDecl, SyntaxError> {
    let start = parser.get_position();
    let type_name = parse_type_name(parser)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    Ok(ParamDecl {
        type_name,
        name,
        span: parser.span_from(start),
    })
}

/// `TypeName Identifier '(' ParamList? ')' CompoundStatement`
pub fn parse_function_def(parser: &mut Parser) -> Result<FunctionDef, SyntaxError> {
    let start = parser.get_position();

    let return_type = parse_type_name(parser)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect_text("(")?;

    let mut parameters = Vec::new();
    if !parser.match_text(")") {
        loop {
            parameters.push(parse_param_decl(parser)?);

            if !parser.match_text(",") {
                break;
            }
        }

        parser.expect_text(")")?;
    }

    let body = parse_compound_stmt(parser)?;

    Ok(FunctionDef {
        return_type,
        name,
        parameters,
        body,
        span: parser.span_from(start),
    })
}
