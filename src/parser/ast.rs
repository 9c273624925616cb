// AST (Abstract Syntax Tree) definitions for arithmetic expressions

use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add, // +
    Mul, // *
}

impl BinOp {
    /// The source symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Mul => '*',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree.
///
/// Every node owns its children exclusively; trees are built bottom-up by the
/// parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Explicit grouping from the source. Transparent to evaluation and to
    /// the prefix rendering.
    Paren(Box<Expr>),

    Number(u64),
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn paren(inner: Expr) -> Self {
        Expr::Paren(Box::new(inner))
    }

    /// Number of nodes in the tree, grouping nodes included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::BinaryOp { left, right, .. } => {
                1 + left.node_count() + right.node_count()
            }
            Expr::Paren(inner) => 1 + inner.node_count(),
            Expr::Number(_) => 1,
        }
    }

    /// Length of the longest root-to-leaf path, counting the root as 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Expr::Paren(inner) => 1 + inner.depth(),
            Expr::Number(_) => 1,
        }
    }
}
