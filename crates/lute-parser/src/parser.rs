//! Recursive descent parser for Lute.
//!
//! The parser is a pure consumer: it takes the materialized token sequence
//! plus an [`Ast`] arena to allocate into, and walks the tokens through a
//! monotonically advancing cursor. Each grammar production is one function
//! (see `stmt` and `expr`); decisions use at most two tokens of lookahead
//! and nothing is ever un-consumed.
//!
//! Errors are fail-fast: the first syntax error aborts the parse and comes
//! back as a structured [`ParseError`] carrying its kind and position. The
//! caller decides how to render it.

pub mod error;
pub mod expr;
pub mod precedence;
pub mod stmt;

use crate::ast::{Ast, NodeId};
use crate::interner::Symbol;
use crate::token::{Span, Token};

pub use error::{ParseError, ParseErrorKind};

/// Parser state: the token sequence and a forward-only cursor.
pub struct Parser {
    tokens: Vec<(Token, Span)>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a pre-lexed token sequence.
    ///
    /// An EOF token is appended if the lexer did not already provide one,
    /// so the cursor always has a token to rest on.
    pub fn new(mut tokens: Vec<(Token, Span)>) -> Self {
        let needs_eof = !matches!(tokens.last(), Some((Token::Eof, _)));
        if needs_eof {
            let eof_span = match tokens.last() {
                Some((_, span)) => Span::new(span.end, span.end, span.line, span.column),
                None => Span::new(0, 0, 1, 1),
            };
            tokens.push((Token::Eof, eof_span));
        }

        Parser { tokens, pos: 0 }
    }

    /// Parse the token sequence into `ast`, returning the root block id.
    ///
    /// The root of every Lute program is a single block.
    pub fn parse(mut self, ast: &mut Ast) -> Result<NodeId, ParseError> {
        stmt::parse_block(&mut self, ast)
    }

    // ------------------------------------------------------------------
    // Token management
    // ------------------------------------------------------------------

    /// The current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos].0
    }

    /// The current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].1
    }

    /// One token of lookahead past the current token.
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1).map(|(token, _)| token)
    }

    /// Advance past the current token. The cursor never moves past EOF.
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    /// Does the current token match `expected`? Payloads are ignored;
    /// only the variant is compared.
    #[inline]
    pub fn check(&self, expected: &Token) -> bool {
        std::mem::discriminant(self.current()) == std::mem::discriminant(expected)
    }

    /// Is the cursor at the EOF token?
    #[inline]
    pub fn at_eof(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    /// Consume the current token if it matches `expected`, returning its
    /// span; otherwise a token-mismatch error at the current position.
    pub fn expect(&mut self, expected: Token) -> Result<Span, ParseError> {
        if self.check(&expected) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(ParseError::unexpected_token(
                expected,
                self.current().clone(),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier token, returning its symbol and span.
    pub fn expect_identifier(&mut self) -> Result<(Symbol, Span), ParseError> {
        match *self.current() {
            Token::Identifier(symbol) => {
                let span = self.current_span();
                self.advance();
                Ok((symbol, span))
            }
            ref found => Err(ParseError::unexpected_token(
                Token::Identifier(Symbol::dummy()),
                found.clone(),
                self.current_span(),
            )),
        }
    }
}
