//! Statement parsing: blocks, declarations, assignments.

use super::{expr, ParseError, Parser};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::token::Token;

/// Parse a block: `'{' statement* '}'`.
///
/// The statement list grows in syntactic order; `{}` is a valid empty
/// block. Running out of input before the closing brace is an unmatched-
/// delimiter error anchored at the *opening* brace.
pub(crate) fn parse_block(parser: &mut Parser, ast: &mut Ast) -> Result<NodeId, ParseError> {
    let open_span = parser.current_span();
    parser.expect(Token::LeftBrace)?;

    let mut statements = Vec::new();
    while !parser.check(&Token::RightBrace) {
        if parser.at_eof() {
            return Err(ParseError::unclosed_delimiter(
                Token::LeftBrace,
                Token::RightBrace,
                open_span,
            ));
        }
        statements.push(parse_statement(parser, ast)?);
    }

    let close_span = parser.current_span();
    parser.advance();

    Ok(ast.alloc(
        NodeKind::Block { statements },
        open_span.to(close_span),
    ))
}

/// Parse one statement.
///
/// Dispatch on the current token: `{` opens a nested block; an identifier
/// followed by `:` is a declaration, followed by `=` an assignment, and
/// anything else falls through to an expression statement (the expression
/// node itself is the statement). No other token can begin a statement.
pub(crate) fn parse_statement(parser: &mut Parser, ast: &mut Ast) -> Result<NodeId, ParseError> {
    match parser.current() {
        Token::LeftBrace => parse_block(parser, ast),
        Token::Identifier(_) => match parser.peek() {
            Some(Token::Colon) => parse_declaration(parser, ast),
            Some(Token::Equal) => parse_assignment(parser, ast),
            _ => expr::parse_expression(parser, ast),
        },
        found => Err(ParseError::statement_expected(
            found.clone(),
            parser.current_span(),
        )),
    }
}

/// Parse a declaration: `identifier ':' identifier`.
///
/// There is no initializer production; `x : int = 5` is a declaration and
/// then a failing statement.
fn parse_declaration(parser: &mut Parser, ast: &mut Ast) -> Result<NodeId, ParseError> {
    let (name, name_span) = parser.expect_identifier()?;
    parser.expect(Token::Colon)?;
    let (ty, ty_span) = parser.expect_identifier()?;

    Ok(ast.alloc(
        NodeKind::Declaration { name, ty },
        name_span.to(ty_span),
    ))
}

/// Parse an assignment: `identifier '=' expression`.
fn parse_assignment(parser: &mut Parser, ast: &mut Ast) -> Result<NodeId, ParseError> {
    let (target, target_span) = parser.expect_identifier()?;
    parser.expect(Token::Equal)?;
    let value = expr::parse_expression(parser, ast)?;

    let span = target_span.to(ast.node(value).span);
    Ok(ast.alloc(NodeKind::Assignment { target, value }, span))
}
