//! Lexer for the Lute toy language.
//!
//! Tokenization is logos-generated: an internal token enum carries owned
//! text, and a conversion pass interns identifier/string payloads and
//! attaches line/column information. The whole input is tokenized up front;
//! the parser then walks the finished token vector.
//!
//! Lute's lexical grammar is deliberately small: decimal integers only,
//! double-quoted strings with no escape sequences and no embedded newlines,
//! `//` line comments.

use crate::interner::Interner;
use crate::token::{Span, Token};
use logos::Logos;
use thiserror::Error;

/// Logos-internal token enum; converted to [`Token`] after matching.
#[derive(Logos, Debug, Clone, PartialEq)]
enum RawToken {
    // Whitespace and comments (skip)
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Whitespace,

    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    // Keywords (exact matches win over the identifier regex)
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("elif")]
    Elif,
    #[token("else")]
    Else,
    #[token("each")]
    Each,
    #[token("while")]
    While,
    #[token("loop")]
    Loop,
    #[token("match")]
    Match,
    #[token("enum")]
    Enum,
    #[token("return")]
    Return,
    #[token("goto")]
    Goto,
    #[token("default")]
    Default,
    #[token("uninit")]
    Uninit,
    #[token("global")]
    Global,
    #[token("internal")]
    Internal,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[regex(r"[0-9]+", parse_number)]
    Number(i64),

    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),

    // Digraphs (must come before their single-char prefixes)
    #[token("?.")]
    SafeNav,
    #[token("<<")]
    LessLess,
    #[token(">>")]
    GreaterGreater,
    #[token("->")]
    Arrow,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("*=")]
    StarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("%=")]
    PercentEqual,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,

    // Single-character symbols
    #[token("!")]
    Bang,
    #[token("#")]
    Hash,
    #[token("$")]
    Dollar,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("'")]
    Apostrophe,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token(",")]
    Comma,
    #[token("-")]
    Minus,
    #[token(".")]
    Dot,
    #[token("/")]
    Slash,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("<")]
    Less,
    #[token("=")]
    Equal,
    #[token(">")]
    Greater,
    #[token("?")]
    Question,
    #[token("@")]
    At,
    #[token("[")]
    LeftBracket,
    #[token("\\")]
    Backslash,
    #[token("]")]
    RightBracket,
    #[token("^")]
    Caret,
    #[token("`")]
    Backtick,
    #[token("{")]
    LeftBrace,
    #[token("|")]
    Pipe,
    #[token("}")]
    RightBrace,
    #[token("~")]
    Tilde,
}

fn parse_number(lex: &mut logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

fn parse_string(lex: &mut logos::Lexer<RawToken>) -> String {
    let s = lex.slice();
    s[1..s.len() - 1].to_string()
}

/// Lexical error with the offending location.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {}:{}", .span.line, .span.column)]
    UnexpectedCharacter { ch: char, span: Span },

    /// A string literal ran into a newline or end of input before its
    /// closing quote. Anchored at the opening quote.
    #[error("unterminated string literal at {}:{}", .span.line, .span.column)]
    UnterminatedString { span: Span },

    #[error("number literal '{text}' out of range at {}:{}", .span.line, .span.column)]
    NumberTooLarge { text: String, span: Span },
}

impl LexError {
    /// Location of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
            LexError::UnterminatedString { span } => *span,
            LexError::NumberTooLarge { span, .. } => *span,
        }
    }
}

/// Main lexer structure.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<(Token, Span)>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// Identifier and string payloads are interned into `interner`. An
    /// explicit [`Token::Eof`] is always appended. All lexical errors are
    /// collected before failing.
    pub fn tokenize(
        mut self,
        interner: &mut Interner,
    ) -> Result<Vec<(Token, Span)>, Vec<LexError>> {
        let mut raw = RawToken::lexer(self.source);
        let mut line = 1u32;
        let mut column = 1u32;
        let mut last_end = 0;

        while let Some(result) = raw.next() {
            let range = raw.span();

            // Advance line/column over whatever was skipped since the
            // previous token.
            for c in self.source[last_end..range.start].chars() {
                if c == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }

            let span = Span::new(range.start, range.end, line, column);

            match result {
                Ok(raw_token) => {
                    let token = convert(raw_token, interner);
                    self.tokens.push((token, span));
                }
                Err(()) => self.errors.push(classify_error(raw.slice(), span)),
            }

            for c in self.source[range.start..range.end].chars() {
                if c == '\n' {
                    line += 1;
                    column = 1;
                } else {
                    column += 1;
                }
            }

            last_end = range.end;
        }

        for c in self.source[last_end..].chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        let eof_span = Span::new(self.source.len(), self.source.len(), line, column);
        self.tokens.push((Token::Eof, eof_span));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Decide what went wrong for a slice logos could not match.
fn classify_error(slice: &str, span: Span) -> LexError {
    let first = slice.chars().next().unwrap_or('\0');
    if first == '"' {
        LexError::UnterminatedString { span }
    } else if first.is_ascii_digit() {
        LexError::NumberTooLarge {
            text: slice.to_string(),
            span,
        }
    } else {
        LexError::UnexpectedCharacter { ch: first, span }
    }
}

fn convert(raw: RawToken, interner: &mut Interner) -> Token {
    match raw {
        RawToken::True => Token::True,
        RawToken::False => Token::False,
        RawToken::If => Token::If,
        RawToken::Elif => Token::Elif,
        RawToken::Else => Token::Else,
        RawToken::Each => Token::Each,
        RawToken::While => Token::While,
        RawToken::Loop => Token::Loop,
        RawToken::Match => Token::Match,
        RawToken::Enum => Token::Enum,
        RawToken::Return => Token::Return,
        RawToken::Goto => Token::Goto,
        RawToken::Default => Token::Default,
        RawToken::Uninit => Token::Uninit,
        RawToken::Global => Token::Global,
        RawToken::Internal => Token::Internal,
        RawToken::Identifier(text) => Token::Identifier(interner.intern(&text)),
        RawToken::Number(value) => Token::Number(value),
        RawToken::Str(text) => Token::Str(interner.intern(&text)),
        RawToken::SafeNav => Token::SafeNav,
        RawToken::LessLess => Token::LessLess,
        RawToken::GreaterGreater => Token::GreaterGreater,
        RawToken::Arrow => Token::Arrow,
        RawToken::AmpAmp => Token::AmpAmp,
        RawToken::PipePipe => Token::PipePipe,
        RawToken::LessEqual => Token::LessEqual,
        RawToken::GreaterEqual => Token::GreaterEqual,
        RawToken::EqualEqual => Token::EqualEqual,
        RawToken::BangEqual => Token::BangEqual,
        RawToken::StarEqual => Token::StarEqual,
        RawToken::SlashEqual => Token::SlashEqual,
        RawToken::PercentEqual => Token::PercentEqual,
        RawToken::PlusEqual => Token::PlusEqual,
        RawToken::MinusEqual => Token::MinusEqual,
        RawToken::Bang => Token::Bang,
        RawToken::Hash => Token::Hash,
        RawToken::Dollar => Token::Dollar,
        RawToken::Percent => Token::Percent,
        RawToken::Amp => Token::Amp,
        RawToken::Apostrophe => Token::Apostrophe,
        RawToken::LeftParen => Token::LeftParen,
        RawToken::RightParen => Token::RightParen,
        RawToken::Star => Token::Star,
        RawToken::Plus => Token::Plus,
        RawToken::Comma => Token::Comma,
        RawToken::Minus => Token::Minus,
        RawToken::Dot => Token::Dot,
        RawToken::Slash => Token::Slash,
        RawToken::Colon => Token::Colon,
        RawToken::Semicolon => Token::Semicolon,
        RawToken::Less => Token::Less,
        RawToken::Equal => Token::Equal,
        RawToken::Greater => Token::Greater,
        RawToken::Question => Token::Question,
        RawToken::At => Token::At,
        RawToken::LeftBracket => Token::LeftBracket,
        RawToken::Backslash => Token::Backslash,
        RawToken::RightBracket => Token::RightBracket,
        RawToken::Caret => Token::Caret,
        RawToken::Backtick => Token::Backtick,
        RawToken::LeftBrace => Token::LeftBrace,
        RawToken::Pipe => Token::Pipe,
        RawToken::RightBrace => Token::RightBrace,
        RawToken::Tilde => Token::Tilde,
        RawToken::Whitespace | RawToken::LineComment => {
            unreachable!("whitespace and comments are skipped")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> (Vec<(Token, Span)>, Interner) {
        let mut interner = Interner::new();
        let tokens = Lexer::new(source)
            .tokenize(&mut interner)
            .expect("lexing failed");
        (tokens, interner)
    }

    #[test]
    fn test_empty_input_yields_eof() {
        let (tokens, _) = lex("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::Eof);
    }

    #[test]
    fn test_identifier_is_interned() {
        let (tokens, interner) = lex("foo foo");
        match (&tokens[0].0, &tokens[1].0) {
            (Token::Identifier(a), Token::Identifier(b)) => {
                assert_eq!(a, b);
                assert_eq!(interner.resolve(*a), "foo");
            }
            other => panic!("expected identifiers, got {other:?}"),
        }
    }

    #[test]
    fn test_keywords_not_identifiers() {
        let (tokens, _) = lex("while loopy");
        assert_eq!(tokens[0].0, Token::While);
        assert!(matches!(tokens[1].0, Token::Identifier(_)));
    }

    #[test]
    fn test_number_literal() {
        let (tokens, _) = lex("12345");
        assert_eq!(tokens[0].0, Token::Number(12345));
    }

    #[test]
    fn test_string_literal_strips_quotes() {
        let (tokens, interner) = lex("\"hello world\"");
        match &tokens[0].0 {
            Token::Str(sym) => assert_eq!(interner.resolve(*sym), "hello world"),
            other => panic!("expected string, got {other:?}"),
        }
    }

    #[test]
    fn test_digraphs_win_over_single_chars() {
        let (tokens, _) = lex("?. <= -> == <");
        let kinds: Vec<_> = tokens.iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                Token::SafeNav,
                Token::LessEqual,
                Token::Arrow,
                Token::EqualEqual,
                Token::Less,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_line_comment_skipped() {
        let (tokens, _) = lex("a // the rest is gone\nb");
        assert!(matches!(tokens[0].0, Token::Identifier(_)));
        assert!(matches!(tokens[1].0, Token::Identifier(_)));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let (tokens, _) = lex("a\n  b");
        assert_eq!(tokens[0].1.line, 1);
        assert_eq!(tokens[0].1.column, 1);
        assert_eq!(tokens[1].1.line, 2);
        assert_eq!(tokens[1].1.column, 3);
    }

    #[test]
    fn test_unterminated_string() {
        let mut interner = Interner::new();
        let errors = Lexer::new("x = \"oops\ny")
            .tokenize(&mut interner)
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, LexError::UnterminatedString { .. })));
    }

    #[test]
    fn test_number_out_of_range() {
        let mut interner = Interner::new();
        let errors = Lexer::new("99999999999999999999999999")
            .tokenize(&mut interner)
            .unwrap_err();
        assert!(matches!(errors[0], LexError::NumberTooLarge { .. }));
    }
}
