//! C code emission for Lute.
//!
//! A read-only walk over the parsed tree, printing a fixed C template per
//! node kind. The whole program becomes the body of `int main()`; every
//! statement gets a trailing `;`. The tree handed in is fully formed and
//! immutable — emission allocates nothing in the arena and never fails.

#![warn(missing_docs)]

use lute_parser::ast::{Ast, NodeId, NodeKind};
use lute_parser::Interner;

/// Emit a complete C translation unit for the program rooted at `root`.
pub fn emit(ast: &Ast, interner: &Interner, root: NodeId) -> String {
    let mut emitter = Emitter {
        ast,
        interner,
        out: String::new(),
    };
    emitter.out.push_str("int main() {\n");
    emitter.emit_node(root);
    emitter.out.push_str("return 0; }\n");
    emitter.out
}

struct Emitter<'a> {
    ast: &'a Ast,
    interner: &'a Interner,
    out: String,
}

impl Emitter<'_> {
    fn emit_node(&mut self, id: NodeId) {
        match &self.ast.node(id).kind {
            NodeKind::Block { statements } => {
                self.out.push_str("{\n");
                for &statement in statements {
                    self.emit_node(statement);
                    self.out.push_str(";\n");
                }
                self.out.push_str("}\n");
            }
            NodeKind::Declaration { name, ty } => {
                // C order: type first.
                self.out.push_str(self.interner.resolve(*ty));
                self.out.push(' ');
                self.out.push_str(self.interner.resolve(*name));
            }
            NodeKind::Assignment { target, value } => {
                self.out.push_str(self.interner.resolve(*target));
                self.out.push_str(" = ");
                self.emit_node(*value);
            }
            NodeKind::Call { callee, arguments } => {
                self.out.push_str(self.interner.resolve(*callee));
                self.out.push('(');
                for (i, &argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.emit_node(argument);
                }
                self.out.push(')');
            }
            NodeKind::Variable(name) => {
                self.out.push_str(self.interner.resolve(*name));
            }
            NodeKind::Number(value) => {
                self.out.push_str(&value.to_string());
            }
            NodeKind::Str(value) => {
                self.out.push('"');
                self.out.push_str(self.interner.resolve(*value));
                self.out.push('"');
            }
            NodeKind::Binary { op, lhs, rhs } => {
                // Parenthesized so the parsed grouping survives verbatim.
                self.out.push('(');
                self.emit_node(*lhs);
                self.out.push(' ');
                self.out.push_str(op.symbol());
                self.out.push(' ');
                self.emit_node(*rhs);
                self.out.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lute_parser::{Lexer, Parser};

    fn emit_source(source: &str) -> String {
        let mut interner = Interner::new();
        let tokens = Lexer::new(source)
            .tokenize(&mut interner)
            .expect("lexing failed");
        let mut ast = Ast::new();
        let root = Parser::new(tokens)
            .parse(&mut ast)
            .expect("parsing failed");
        emit(&ast, &interner, root)
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(emit_source("{}"), "int main() {\n{\n}\nreturn 0; }\n");
    }

    #[test]
    fn test_declaration_flips_to_c_order() {
        assert_eq!(
            emit_source("{ x : int }"),
            "int main() {\n{\nint x;\n}\nreturn 0; }\n"
        );
    }

    #[test]
    fn test_assignment_and_literals() {
        assert_eq!(
            emit_source("{ x = 5 }"),
            "int main() {\n{\nx = 5;\n}\nreturn 0; }\n"
        );
    }

    #[test]
    fn test_call_with_arguments() {
        assert_eq!(
            emit_source("{ print(\"hi\", x, 3) }"),
            "int main() {\n{\nprint(\"hi\", x, 3);\n}\nreturn 0; }\n"
        );
    }

    #[test]
    fn test_binary_expression_is_parenthesized() {
        assert_eq!(
            emit_source("{ x = 1 + 2 * 3 }"),
            "int main() {\n{\nx = (1 + (2 * 3));\n}\nreturn 0; }\n"
        );
    }

    #[test]
    fn test_nested_blocks() {
        assert_eq!(
            emit_source("{ { y = 1 } }"),
            "int main() {\n{\n{\ny = 1;\n}\n;\n}\nreturn 0; }\n"
        );
    }

    #[test]
    fn test_full_program() {
        let source = "{ greeting : string  greeting = \"hello\"  print(greeting, 1 + 2) }";
        assert_eq!(
            emit_source(source),
            "int main() {\n{\nstring greeting;\ngreeting = \"hello\";\nprint(greeting, (1 + 2));\n}\nreturn 0; }\n"
        );
    }
}
