//! `lutec build` — translate a Lute file to C.

use anyhow::Context;
use std::path::Path;

pub fn execute(file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let unit = super::lex_unit(file)?;
    let (ast, root) = super::parse_unit(&unit)?;

    let c_source = lute_emitter::emit(&ast, &unit.interner, root);

    match output {
        Some(path) => std::fs::write(path, c_source)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{c_source}"),
    }
    Ok(())
}
