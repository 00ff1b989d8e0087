//! `lutec ast` — parse a file and pretty-print its tree.

use lute_parser::ast::{Ast, NodeId, NodeKind};
use lute_parser::Interner;
use std::path::Path;

pub fn execute(file: &Path) -> anyhow::Result<()> {
    let unit = super::lex_unit(file)?;
    let (ast, root) = super::parse_unit(&unit)?;

    let mut out = String::new();
    print_node(&ast, &unit.interner, root, 0, &mut out);
    print!("{out}");
    Ok(())
}

fn print_node(ast: &Ast, interner: &Interner, id: NodeId, depth: usize, out: &mut String) {
    let node = ast.node(id);
    let indent = "  ".repeat(depth);
    out.push_str(&indent);

    match &node.kind {
        NodeKind::Block { statements } => {
            out.push_str(&format!("Block ({} statements)\n", statements.len()));
            for &statement in statements {
                print_node(ast, interner, statement, depth + 1, out);
            }
        }
        NodeKind::Declaration { name, ty } => {
            out.push_str(&format!(
                "Declaration {} : {}\n",
                interner.resolve(*name),
                interner.resolve(*ty)
            ));
        }
        NodeKind::Assignment { target, value } => {
            out.push_str(&format!("Assignment {} =\n", interner.resolve(*target)));
            print_node(ast, interner, *value, depth + 1, out);
        }
        NodeKind::Call { callee, arguments } => {
            out.push_str(&format!("Call {}\n", interner.resolve(*callee)));
            for &argument in arguments {
                print_node(ast, interner, argument, depth + 1, out);
            }
        }
        NodeKind::Variable(name) => {
            out.push_str(&format!("Variable {}\n", interner.resolve(*name)));
        }
        NodeKind::Number(value) => {
            out.push_str(&format!("Number {value}\n"));
        }
        NodeKind::Str(value) => {
            out.push_str(&format!("String \"{}\"\n", interner.resolve(*value)));
        }
        NodeKind::Binary { op, lhs, rhs } => {
            out.push_str(&format!("Binary {}\n", op.symbol()));
            print_node(ast, interner, *lhs, depth + 1, out);
            print_node(ast, interner, *rhs, depth + 1, out);
        }
    }
}
