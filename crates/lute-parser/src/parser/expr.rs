//! Expression parsing: precedence climbing over primaries.

use super::precedence::{self, Precedence};
use super::{ParseError, Parser};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::token::Token;

/// Parse an expression.
pub(crate) fn parse_expression(parser: &mut Parser, ast: &mut Ast) -> Result<NodeId, ParseError> {
    parse_binary(parser, ast, Precedence::LOWEST)
}

/// Precedence climbing. Operators at or above `min` are consumed; the right
/// operand climbs one level tighter, which makes every operator
/// left-associative.
fn parse_binary(
    parser: &mut Parser,
    ast: &mut Ast,
    min: Precedence,
) -> Result<NodeId, ParseError> {
    let mut lhs = parse_primary(parser, ast)?;

    while let Some((op, prec)) = precedence::binary_op(parser.current()) {
        if prec < min {
            break;
        }
        parser.advance();
        let rhs = parse_binary(parser, ast, prec.next())?;
        let span = ast.node(lhs).span.to(ast.node(rhs).span);
        lhs = ast.alloc(NodeKind::Binary { op, lhs, rhs }, span);
    }

    Ok(lhs)
}

/// Parse a primary expression.
///
/// An identifier directly followed by `(` is a function call — the one
/// LL(2) decision in the grammar. A bare identifier is a variable
/// reference; numbers and strings are literals; `(` groups a
/// subexpression. Anything else cannot begin an expression.
fn parse_primary(parser: &mut Parser, ast: &mut Ast) -> Result<NodeId, ParseError> {
    match parser.current().clone() {
        Token::Identifier(name) => {
            if matches!(parser.peek(), Some(Token::LeftParen)) {
                return parse_call(parser, ast);
            }
            let span = parser.current_span();
            parser.advance();
            Ok(ast.alloc(NodeKind::Variable(name), span))
        }
        Token::Number(value) => {
            let span = parser.current_span();
            parser.advance();
            Ok(ast.alloc(NodeKind::Number(value), span))
        }
        Token::Str(value) => {
            let span = parser.current_span();
            parser.advance();
            Ok(ast.alloc(NodeKind::Str(value), span))
        }
        Token::LeftParen => {
            parser.advance();
            let inner = parse_expression(parser, ast)?;
            parser.expect(Token::RightParen)?;
            Ok(inner)
        }
        found => Err(ParseError::expression_expected(
            found,
            parser.current_span(),
        )),
    }
}

/// Parse a function call: `identifier '(' (expression (',' expression)*)? ')'`.
///
/// Zero arguments are allowed. After an argument, a comma continues the
/// list and `)` ends it; a trailing comma is not accepted (the comma leads
/// straight into another expression parse).
fn parse_call(parser: &mut Parser, ast: &mut Ast) -> Result<NodeId, ParseError> {
    let (callee, callee_span) = parser.expect_identifier()?;
    parser.expect(Token::LeftParen)?;

    let mut arguments = Vec::new();
    if !parser.check(&Token::RightParen) {
        loop {
            arguments.push(parse_expression(parser, ast)?);
            if parser.check(&Token::Comma) {
                parser.advance();
                continue;
            }
            break;
        }
    }

    let close_span = parser.current_span();
    parser.expect(Token::RightParen)?;

    Ok(ast.alloc(
        NodeKind::Call { callee, arguments },
        callee_span.to(close_span),
    ))
}
