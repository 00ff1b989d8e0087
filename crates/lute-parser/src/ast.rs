//! AST node definitions.
//!
//! The tree is a tagged union: one [`NodeKind`] case per construct, plus a
//! source span on every node for diagnostics. Nodes live in an [`Ast`]
//! context (an arena) and refer to children by [`NodeId`]; the tree shape
//! is strictly hierarchical — each child id is owned by exactly one parent
//! and nothing is shared or cyclic. Once parsing returns, the tree is
//! immutable and consumers walk it read-only.

use crate::arena::{Arena, Handle};
use crate::interner::Symbol;
use crate::token::Span;

/// Handle to a node inside an [`Ast`].
pub type NodeId = Handle<Node>;

/// One AST node: a construct tag plus its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

/// The constructs of the Lute language.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// `name : type` — a declaration with no initializer. The grammar has
    /// no `name : type = value` production; a trailing initializer is a
    /// separate (failing) statement.
    Declaration { name: Symbol, ty: Symbol },

    /// `target = value`
    Assignment { target: Symbol, value: NodeId },

    /// `callee(arg, arg, ...)` — possibly zero arguments.
    Call { callee: Symbol, arguments: Vec<NodeId> },

    /// Decimal integer literal.
    Number(i64),

    /// String literal (interned body, quotes stripped).
    Str(Symbol),

    /// Identifier used as an expression.
    Variable(Symbol),

    /// `lhs op rhs`, produced by precedence climbing.
    Binary {
        op: BinaryOp,
        lhs: NodeId,
        rhs: NodeId,
    },

    /// `{ statement* }` — also the root of every parse.
    Block { statements: Vec<NodeId> },
}

/// Binary operators, in the token set's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    And,
    Or,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Surface (and C) spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

/// The tree of one compilation unit: an arena of nodes.
///
/// Each unit gets its own `Ast` (and `Interner`); nothing is global, so two
/// units can be processed independently.
pub struct Ast {
    nodes: Arena<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Ast {
            nodes: Arena::new(),
        }
    }

    /// Allocate a node, returning its id.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.nodes.alloc(Node { kind, span })
    }

    /// Resolve a node id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Structural equality of two subtrees, possibly across different
    /// arenas. Spans and field values are compared; node ids are followed,
    /// not compared.
    pub fn tree_eq(&self, id: NodeId, other: &Ast, other_id: NodeId) -> bool {
        let a = self.node(id);
        let b = other.node(other_id);
        if a.span != b.span {
            return false;
        }
        match (&a.kind, &b.kind) {
            (
                NodeKind::Declaration { name, ty },
                NodeKind::Declaration {
                    name: name2,
                    ty: ty2,
                },
            ) => name == name2 && ty == ty2,
            (
                NodeKind::Assignment { target, value },
                NodeKind::Assignment {
                    target: target2,
                    value: value2,
                },
            ) => target == target2 && self.tree_eq(*value, other, *value2),
            (
                NodeKind::Call { callee, arguments },
                NodeKind::Call {
                    callee: callee2,
                    arguments: arguments2,
                },
            ) => {
                callee == callee2
                    && arguments.len() == arguments2.len()
                    && arguments
                        .iter()
                        .zip(arguments2)
                        .all(|(x, y)| self.tree_eq(*x, other, *y))
            }
            (NodeKind::Number(n), NodeKind::Number(n2)) => n == n2,
            (NodeKind::Str(s), NodeKind::Str(s2)) => s == s2,
            (NodeKind::Variable(v), NodeKind::Variable(v2)) => v == v2,
            (
                NodeKind::Binary { op, lhs, rhs },
                NodeKind::Binary {
                    op: op2,
                    lhs: lhs2,
                    rhs: rhs2,
                },
            ) => {
                op == op2
                    && self.tree_eq(*lhs, other, *lhs2)
                    && self.tree_eq(*rhs, other, *rhs2)
            }
            (NodeKind::Block { statements }, NodeKind::Block { statements: statements2 }) => {
                statements.len() == statements2.len()
                    && statements
                        .iter()
                        .zip(statements2)
                        .all(|(x, y)| self.tree_eq(*x, other, *y))
            }
            _ => false,
        }
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}
