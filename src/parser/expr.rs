use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, IdentifierExpr, LiteralExpr},
    },
    errors::errors::{ErrorImpl, SyntaxError},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, SyntaxError> {
    // First parse NUD
    let Some(nud) = parser.nud_handler() else {
        let token = parser.current_token();
        return Err(parser.error(ErrorImpl::ExpectedExpression {
            found: token.kind,
            token: token.value.clone(),
        }));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, it takes `left` as its lhs
    while let Some((led, operator_bp)) = parser.led_handler() {
        if operator_bp <= bp {
            break;
        }

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::IntegerConstant => Ok(Expr::Literal(LiteralExpr {
            value: token.value,
            span: token.span,
        })),
        TokenKind::Identifier => Ok(Expr::Identifier(IdentifierExpr {
            name: token.value,
            span: token.span,
        })),
        _ => Err(SyntaxError::new(
            ErrorImpl::ExpectedExpression {
                found: token.kind,
                token: token.value.clone(),
            },
            token,
        )),
    }
}

/// `'(' Expression ')'`. Yields the inner expression itself.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parser.advance();

    let expr = parser.nested(|parser| parse_expr(parser, BindingPower::Default))?;

    parser.expect_text(")")?;

    Ok(expr)
}

/// Left associative: the rhs only takes operators that bind tighter.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, SyntaxError> {
    let start = left.get_span().start;
    let operator = parser.advance().value.clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span: parser.span_from(start),
    }))
}

/// Right associative: `a = b = c` is `a = (b = c)`.
pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, SyntaxError> {
    let start = left.get_span().start;
    let operator = parser.advance().value.clone();
    let right = parser.nested(|parser| parse_expr(parser, BindingPower::Default))?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span: parser.span_from(start),
    }))
}
