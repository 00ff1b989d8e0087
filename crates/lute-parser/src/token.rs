//! Token definitions for the Lute toy language.
//!
//! One variant per lexical class: literals carry their payload (interned
//! text or a parsed integer), everything else is a bare tag. The grammar
//! only consumes a handful of these; the rest exist so every lexeme of a
//! source file is classified and positioned, which is what the token dump
//! and future grammar work want.

use crate::interner::Symbol;
use std::fmt;

/// A source region: byte range plus 1-based line/column of its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Span {
            start,
            end,
            line,
            column,
        }
    }

    /// Covering span from the start of `self` to the end of `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Identifier (interned)
    Identifier(Symbol),
    /// Decimal integer literal
    Number(i64),
    /// String literal body, without quotes (interned)
    Str(Symbol),

    // Keywords
    True,
    False,
    If,
    Elif,
    Else,
    Each,
    While,
    Loop,
    Match,
    Enum,
    Return,
    Goto,
    Default,
    Uninit,
    Global,
    Internal,

    // Digraphs
    /// `?.`
    SafeNav,
    /// `<<`
    LessLess,
    /// `>>`
    GreaterGreater,
    /// `->`
    Arrow,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `*=`
    StarEqual,
    /// `/=`
    SlashEqual,
    /// `%=`
    PercentEqual,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,

    // Single-character symbols
    Bang,
    Hash,
    Dollar,
    Percent,
    Amp,
    Apostrophe,
    LeftParen,
    RightParen,
    Star,
    Plus,
    Comma,
    Minus,
    Dot,
    Slash,
    Colon,
    Semicolon,
    Less,
    Equal,
    Greater,
    Question,
    At,
    LeftBracket,
    Backslash,
    RightBracket,
    Caret,
    Backtick,
    LeftBrace,
    Pipe,
    RightBrace,
    Tilde,

    /// Explicit end-of-input marker, always the last token of a stream.
    Eof,
}

impl fmt::Display for Token {
    /// Surface spelling, used in error messages and the token dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Identifier(_) => "identifier",
            Token::Number(_) => "number",
            Token::Str(_) => "string",
            Token::True => "true",
            Token::False => "false",
            Token::If => "if",
            Token::Elif => "elif",
            Token::Else => "else",
            Token::Each => "each",
            Token::While => "while",
            Token::Loop => "loop",
            Token::Match => "match",
            Token::Enum => "enum",
            Token::Return => "return",
            Token::Goto => "goto",
            Token::Default => "default",
            Token::Uninit => "uninit",
            Token::Global => "global",
            Token::Internal => "internal",
            Token::SafeNav => "?.",
            Token::LessLess => "<<",
            Token::GreaterGreater => ">>",
            Token::Arrow => "->",
            Token::AmpAmp => "&&",
            Token::PipePipe => "||",
            Token::LessEqual => "<=",
            Token::GreaterEqual => ">=",
            Token::EqualEqual => "==",
            Token::BangEqual => "!=",
            Token::StarEqual => "*=",
            Token::SlashEqual => "/=",
            Token::PercentEqual => "%=",
            Token::PlusEqual => "+=",
            Token::MinusEqual => "-=",
            Token::Bang => "!",
            Token::Hash => "#",
            Token::Dollar => "$",
            Token::Percent => "%",
            Token::Amp => "&",
            Token::Apostrophe => "'",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Star => "*",
            Token::Plus => "+",
            Token::Comma => ",",
            Token::Minus => "-",
            Token::Dot => ".",
            Token::Slash => "/",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Less => "<",
            Token::Equal => "=",
            Token::Greater => ">",
            Token::Question => "?",
            Token::At => "@",
            Token::LeftBracket => "[",
            Token::Backslash => "\\",
            Token::RightBracket => "]",
            Token::Caret => "^",
            Token::Backtick => "`",
            Token::LeftBrace => "{",
            Token::Pipe => "|",
            Token::RightBrace => "}",
            Token::Tilde => "~",
            Token::Eof => "end of file",
        };
        f.write_str(text)
    }
}
