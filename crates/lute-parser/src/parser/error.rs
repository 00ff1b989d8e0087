//! Parse error types.
//!
//! Every grammar rule returns `Result<_, ParseError>`; the first error
//! aborts the parse and is handed back to the caller, which decides how to
//! render it. The kind enum mirrors the ways a parse can go wrong, each
//! carrying the span a diagnostic should point at.

use crate::token::{Span, Token};
use std::fmt;

/// A parse error with location and a prebuilt message.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,

    /// Where a diagnostic should point. For unclosed delimiters this is
    /// the *opening* token, not the end of input — that is the actionable
    /// location.
    pub span: Span,

    /// Human-readable error message
    pub message: String,
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A rule required one specific token and found another.
    UnexpectedToken { expected: Token, found: Token },

    /// A rule required a token but the input ended.
    UnexpectedEof { expected: Token },

    /// An opening delimiter was never closed.
    UnclosedDelimiter { open: Token, expected_close: Token },

    /// The current token cannot begin a statement.
    StatementExpected { found: Token },

    /// The current token cannot begin an expression.
    ExpressionExpected { found: Token },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// A rule expected `expected` and found `found` at `span`.
    pub fn unexpected_token(expected: Token, found: Token, span: Span) -> Self {
        if matches!(found, Token::Eof) {
            return Self::unexpected_eof(expected, span);
        }
        let message = format!("expected '{expected}', found '{found}'");
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
            message,
        }
    }

    /// Input ended where `expected` was required.
    pub fn unexpected_eof(expected: Token, span: Span) -> Self {
        let message = format!("unexpected end of file, expected '{expected}'");
        ParseError {
            kind: ParseErrorKind::UnexpectedEof { expected },
            span,
            message,
        }
    }

    /// `open` at `open_span` was never matched by `expected_close`.
    pub fn unclosed_delimiter(open: Token, expected_close: Token, open_span: Span) -> Self {
        let message = format!("unmatched '{open}', expected a closing '{expected_close}'");
        ParseError {
            kind: ParseErrorKind::UnclosedDelimiter {
                open,
                expected_close,
            },
            span: open_span,
            message,
        }
    }

    /// `found` cannot begin a statement.
    pub fn statement_expected(found: Token, span: Span) -> Self {
        let message = format!("unexpected token in statement position: '{found}'");
        ParseError {
            kind: ParseErrorKind::StatementExpected { found },
            span,
            message,
        }
    }

    /// `found` cannot begin an expression.
    pub fn expression_expected(found: Token, span: Span) -> Self {
        let message = format!("unexpected token in expression position: '{found}'");
        ParseError {
            kind: ParseErrorKind::ExpressionExpected { found },
            span,
            message,
        }
    }
}
