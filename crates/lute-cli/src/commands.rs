//! CLI subcommands.
//!
//! Every subcommand runs the same front half — read the file, lex, parse —
//! with one `Interner` and one `Ast` per compilation unit. Compile errors
//! are rendered with source context and end the process with a non-zero
//! status; only I/O problems surface as `anyhow` errors.

pub mod ast;
pub mod build;
pub mod tokens;

use crate::diagnostics;
use anyhow::Context;
use lute_parser::{Ast, Interner, Lexer, NodeId, Parser, Span, Token};
use std::path::Path;

/// A lexed compilation unit.
pub(crate) struct Unit {
    pub name: String,
    pub source: String,
    pub tokens: Vec<(Token, Span)>,
    pub interner: Interner,
}

/// Read and tokenize one file, rendering lexical errors on failure.
pub(crate) fn lex_unit(path: &Path) -> anyhow::Result<Unit> {
    let name = path.display().to_string();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {name}"))?;

    let mut interner = Interner::new();
    match Lexer::new(&source).tokenize(&mut interner) {
        Ok(tokens) => Ok(Unit {
            name,
            source,
            tokens,
            interner,
        }),
        Err(errors) => {
            diagnostics::report_lex_errors(&name, &source, &errors)?;
            std::process::exit(1);
        }
    }
}

/// Parse a lexed unit, rendering the parse error on failure.
pub(crate) fn parse_unit(unit: &Unit) -> anyhow::Result<(Ast, NodeId)> {
    let mut ast = Ast::new();
    match Parser::new(unit.tokens.clone()).parse(&mut ast) {
        Ok(root) => Ok((ast, root)),
        Err(error) => {
            diagnostics::report_parse_error(&unit.name, &unit.source, &error)?;
            std::process::exit(1);
        }
    }
}
