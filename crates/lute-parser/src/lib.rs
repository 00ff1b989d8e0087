//! Lute language front end.
//!
//! Lexer, string interner, node arena, and recursive-descent parser for
//! the Lute toy language. The parser produces an arena-backed AST that the
//! emitter crate walks read-only.
//!
//! # Example
//!
//! ```
//! use lute_parser::{Ast, Interner, Lexer, Parser};
//!
//! let source = r#"
//!     {
//!         greeting : string
//!         greeting = "hello"
//!         print(greeting, 42)
//!     }
//! "#;
//!
//! let mut interner = Interner::new();
//! let tokens = Lexer::new(source).tokenize(&mut interner).unwrap();
//!
//! let mut ast = Ast::new();
//! let root = Parser::new(tokens).parse(&mut ast).unwrap();
//! assert!(matches!(
//!     ast.node(root).kind,
//!     lute_parser::ast::NodeKind::Block { .. }
//! ));
//! ```

pub mod arena;
pub mod ast;
pub mod interner;
pub mod lexer;
pub mod parser;
pub mod token;

// Re-exports for convenience
pub use arena::{Arena, Handle};
pub use ast::{Ast, BinaryOp, Node, NodeId, NodeKind};
pub use interner::{Interner, Symbol};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, ParseErrorKind, Parser};
pub use token::{Span, Token};
