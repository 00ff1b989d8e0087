//! Binary operator precedence table.
//!
//! The token set carries the usual arithmetic/comparison/logical operators;
//! expression parsing climbs this table. All Lute binary operators are
//! left-associative.

use crate::ast::BinaryOp;
use crate::token::Token;

/// Precedence level (higher = tighter binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    LogicalOr = 0,      // ||
    LogicalAnd = 1,     // &&
    Equality = 2,       // ==, !=
    Relational = 3,     // <, >, <=, >=
    Shift = 4,          // <<, >>
    Additive = 5,       // +, -
    Multiplicative = 6, // *, /, %
    Primary = 7,        // operands; tighter than any binary operator
}

impl Precedence {
    /// Lowest binary precedence; expression parsing starts here.
    pub const LOWEST: Precedence = Precedence::LogicalOr;

    /// The next-tighter level, used as the minimum for a left-associative
    /// operator's right operand.
    pub fn next(self) -> Precedence {
        match self {
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Primary,
            Precedence::Primary => Precedence::Primary,
        }
    }
}

/// Map a token to its binary operator, if it is one.
pub fn binary_op(token: &Token) -> Option<(BinaryOp, Precedence)> {
    let pair = match token {
        Token::PipePipe => (BinaryOp::Or, Precedence::LogicalOr),
        Token::AmpAmp => (BinaryOp::And, Precedence::LogicalAnd),
        Token::EqualEqual => (BinaryOp::Eq, Precedence::Equality),
        Token::BangEqual => (BinaryOp::Ne, Precedence::Equality),
        Token::Less => (BinaryOp::Lt, Precedence::Relational),
        Token::Greater => (BinaryOp::Gt, Precedence::Relational),
        Token::LessEqual => (BinaryOp::Le, Precedence::Relational),
        Token::GreaterEqual => (BinaryOp::Ge, Precedence::Relational),
        Token::LessLess => (BinaryOp::Shl, Precedence::Shift),
        Token::GreaterGreater => (BinaryOp::Shr, Precedence::Shift),
        Token::Plus => (BinaryOp::Add, Precedence::Additive),
        Token::Minus => (BinaryOp::Sub, Precedence::Additive),
        Token::Star => (BinaryOp::Mul, Precedence::Multiplicative),
        Token::Slash => (BinaryOp::Div, Precedence::Multiplicative),
        Token::Percent => (BinaryOp::Rem, Precedence::Multiplicative),
        _ => return None,
    };
    Some(pair)
}
