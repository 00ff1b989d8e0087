//! `lutec tokens` — dump the classified token stream of a file.

use lute_parser::Token;
use std::path::Path;

pub fn execute(file: &Path) -> anyhow::Result<()> {
    let unit = super::lex_unit(file)?;

    for (token, span) in &unit.tokens {
        let detail = match token {
            Token::Identifier(sym) => format!(" '{}'", unit.interner.resolve(*sym)),
            Token::Str(sym) => format!(" \"{}\"", unit.interner.resolve(*sym)),
            Token::Number(value) => format!(" {value}"),
            _ => String::new(),
        };
        println!("{}:{}\t{token}{detail}", span.line, span.column);
    }
    Ok(())
}
