//! Basic token tests for the Lute lexer.

use lute_parser::{Interner, Lexer, Token};

fn assert_tokens(source: &str, expected: Vec<Token>) {
    let mut interner = Interner::new();
    let tokens = Lexer::new(source)
        .tokenize(&mut interner)
        .expect("lexing failed");
    let actual: Vec<Token> = tokens.iter().map(|(t, _)| t.clone()).collect();

    // Expected should include EOF
    let mut expected_with_eof = expected;
    expected_with_eof.push(Token::Eof);

    assert_eq!(actual, expected_with_eof, "token mismatch");
}

#[test]
fn test_keywords() {
    assert_tokens(
        "if elif else each while loop match enum return goto",
        vec![
            Token::If,
            Token::Elif,
            Token::Else,
            Token::Each,
            Token::While,
            Token::Loop,
            Token::Match,
            Token::Enum,
            Token::Return,
            Token::Goto,
        ],
    );
}

#[test]
fn test_keywords_storage_classes() {
    assert_tokens(
        "true false default uninit global internal",
        vec![
            Token::True,
            Token::False,
            Token::Default,
            Token::Uninit,
            Token::Global,
            Token::Internal,
        ],
    );
}

#[test]
fn test_grammar_tokens() {
    let mut interner = Interner::new();
    let tokens = Lexer::new("{ x : int x = f(1, \"s\") }")
        .tokenize(&mut interner)
        .expect("lexing failed");
    let kinds: Vec<Token> = tokens.iter().map(|(t, _)| t.clone()).collect();

    assert!(matches!(kinds[0], Token::LeftBrace));
    assert!(matches!(kinds[1], Token::Identifier(_)));
    assert!(matches!(kinds[2], Token::Colon));
    assert!(matches!(kinds[3], Token::Identifier(_)));
    assert!(matches!(kinds[4], Token::Identifier(_)));
    assert!(matches!(kinds[5], Token::Equal));
    assert!(matches!(kinds[6], Token::Identifier(_)));
    assert!(matches!(kinds[7], Token::LeftParen));
    assert!(matches!(kinds[8], Token::Number(1)));
    assert!(matches!(kinds[9], Token::Comma));
    assert!(matches!(kinds[10], Token::Str(_)));
    assert!(matches!(kinds[11], Token::RightParen));
    assert!(matches!(kinds[12], Token::RightBrace));
    assert!(matches!(kinds[13], Token::Eof));
}

#[test]
fn test_digraphs() {
    assert_tokens(
        "?. << >> -> && || <= >= == != *= /= %= += -=",
        vec![
            Token::SafeNav,
            Token::LessLess,
            Token::GreaterGreater,
            Token::Arrow,
            Token::AmpAmp,
            Token::PipePipe,
            Token::LessEqual,
            Token::GreaterEqual,
            Token::EqualEqual,
            Token::BangEqual,
            Token::StarEqual,
            Token::SlashEqual,
            Token::PercentEqual,
            Token::PlusEqual,
            Token::MinusEqual,
        ],
    );
}

#[test]
fn test_single_char_symbols() {
    assert_tokens(
        "! # $ % & ( ) * + , - . / : ; < = > ? @ [ ] ^ { | } ~",
        vec![
            Token::Bang,
            Token::Hash,
            Token::Dollar,
            Token::Percent,
            Token::Amp,
            Token::LeftParen,
            Token::RightParen,
            Token::Star,
            Token::Plus,
            Token::Comma,
            Token::Minus,
            Token::Dot,
            Token::Slash,
            Token::Colon,
            Token::Semicolon,
            Token::Less,
            Token::Equal,
            Token::Greater,
            Token::Question,
            Token::At,
            Token::LeftBracket,
            Token::RightBracket,
            Token::Caret,
            Token::LeftBrace,
            Token::Pipe,
            Token::RightBrace,
            Token::Tilde,
        ],
    );
}

#[test]
fn test_spans_point_into_source() {
    let source = "abc = 12";
    let mut interner = Interner::new();
    let tokens = Lexer::new(source)
        .tokenize(&mut interner)
        .expect("lexing failed");

    let (_, id_span) = &tokens[0];
    assert_eq!(&source[id_span.start..id_span.end], "abc");

    let (_, num_span) = &tokens[2];
    assert_eq!(&source[num_span.start..num_span.end], "12");
    assert_eq!(num_span.column, 7);
}
