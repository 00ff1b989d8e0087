//! Rendering of compile errors with source context.
//!
//! Errors from the lexer and parser are structured values carrying spans;
//! this module turns them into terminal diagnostics showing the offending
//! source line with the error region underlined.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use lute_parser::{LexError, ParseError, ParseErrorKind, Span};
use termcolor::{ColorChoice, StandardStream};

fn byte_range(span: Span) -> std::ops::Range<usize> {
    span.start..span.end
}

/// Print every lexical error against the source it came from.
pub fn report_lex_errors(
    file_name: &str,
    source: &str,
    errors: &[LexError],
) -> anyhow::Result<()> {
    let mut files = SimpleFiles::new();
    let file_id = files.add(file_name, source);
    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();

    for error in errors {
        let diagnostic = Diagnostic::error()
            .with_message(error.to_string())
            .with_labels(vec![Label::primary(file_id, byte_range(error.span()))]);
        term::emit(&mut writer.lock(), &config, &files, &diagnostic)?;
    }
    Ok(())
}

/// Print a parse error against the source it came from.
pub fn report_parse_error(
    file_name: &str,
    source: &str,
    error: &ParseError,
) -> anyhow::Result<()> {
    let mut files = SimpleFiles::new();
    let file_id = files.add(file_name, source);
    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();

    let label_text = match &error.kind {
        ParseErrorKind::UnclosedDelimiter { open, .. } => {
            format!("this '{open}' is never closed")
        }
        ParseErrorKind::UnexpectedEof { expected } => {
            format!("input ends here, expected '{expected}'")
        }
        _ => "error occurs here".to_string(),
    };

    let diagnostic = Diagnostic::error()
        .with_message(error.message.clone())
        .with_labels(vec![
            Label::primary(file_id, byte_range(error.span)).with_message(label_text)
        ]);
    term::emit(&mut writer.lock(), &config, &files, &diagnostic)?;
    Ok(())
}
