//! Lute CLI tool
//!
//! Command-line interface for the Lute to C source translator:
//! translation, token stream and AST inspection.

mod commands;
mod diagnostics;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lutec")]
#[command(about = "Lute to C source translator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a Lute file to C
    Build {
        /// Input file
        file: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the classified token stream of a file
    Tokens {
        /// Input file
        file: PathBuf,
    },

    /// Parse a file and pretty-print its AST
    Ast {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { file, output } => commands::build::execute(&file, output.as_deref()),
        Commands::Tokens { file } => commands::tokens::execute(&file),
        Commands::Ast { file } => commands::ast::execute(&file),
    }
}
