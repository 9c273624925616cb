//! Canonical prefix rendering
//!
//! Binary nodes render as `(op left right)`, literals as their decimal value.
//! Source grouping nodes are unwrapped: the prefix form is already
//! unambiguous, so `1+(2+3)*4` and `1+((2+3))*4` render identically.

use crate::parser::ast::Expr;
use std::fmt::{self, Write};

/// Render `expr` in fully-parenthesized prefix form.
pub fn lispify(expr: &Expr) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_prefix(&mut out, expr);
    out
}

fn write_prefix<W: Write>(out: &mut W, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::BinaryOp { op, left, right } => {
            write!(out, "({} ", op)?;
            write_prefix(out, left)?;
            out.write_char(' ')?;
            write_prefix(out, right)?;
            out.write_char(')')
        }
        Expr::Paren(inner) => write_prefix(out, inner),
        Expr::Number(value) => write!(out, "{}", value),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prefix(f, self)
    }
}
