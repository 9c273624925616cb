//! Indented tree outline
//!
//! Unlike the prefix form, the outline keeps grouping nodes so the shape
//! produced by the parser can be inspected node by node:
//!
//! ```text
//! +
//! ├─ 1
//! └─ *
//!    ├─ ( )
//!    │  └─ +
//!    │     ├─ 2
//!    │     └─ 3
//!    └─ 4
//! ```

use crate::parser::ast::{BinOp, Expr};

/// What kind of node a line describes (used for coloring)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    Operator(BinOp),
    Group,
    Number,
}

/// One node of the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineLine {
    /// Box-drawing prefix placing the node under its parent
    pub guide: String,
    pub label: String,
    pub kind: OutlineKind,
    pub depth: usize,
}

impl OutlineLine {
    pub fn text(&self) -> String {
        format!("{}{}", self.guide, self.label)
    }
}

/// Flatten `expr` into outline lines, parents before children, left first.
pub fn outline(expr: &Expr) -> Vec<OutlineLine> {
    let mut lines = Vec::with_capacity(expr.node_count());
    walk(expr, "", None, 0, &mut lines);
    lines
}

/// `is_last` is `None` for the root, which gets no connector.
fn walk(
    expr: &Expr,
    indent: &str,
    is_last: Option<bool>,
    depth: usize,
    lines: &mut Vec<OutlineLine>,
) {
    let (guide, child_indent) = match is_last {
        None => (String::new(), String::new()),
        Some(true) => (format!("{}└─ ", indent), format!("{}   ", indent)),
        Some(false) => (format!("{}├─ ", indent), format!("{}│  ", indent)),
    };

    let (label, kind) = match expr {
        Expr::BinaryOp { op, .. } => (op.to_string(), OutlineKind::Operator(*op)),
        Expr::Paren(_) => ("( )".to_string(), OutlineKind::Group),
        Expr::Number(value) => (value.to_string(), OutlineKind::Number),
    };

    lines.push(OutlineLine {
        guide,
        label,
        kind,
        depth,
    });

    match expr {
        Expr::BinaryOp { left, right, .. } => {
            walk(left, &child_indent, Some(false), depth + 1, lines);
            walk(right, &child_indent, Some(true), depth + 1, lines);
        }
        Expr::Paren(inner) => walk(inner, &child_indent, Some(true), depth + 1, lines),
        Expr::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn outline_text(source: &str) -> Vec<String> {
        outline(&parse_str(source).unwrap())
            .iter()
            .map(OutlineLine::text)
            .collect()
    }

    #[test]
    fn test_leaf() {
        assert_eq!(outline_text("5"), vec!["5"]);
    }

    #[test]
    fn test_nested_with_group() {
        assert_eq!(
            outline_text("1+(2+3)*4"),
            vec![
                "+",
                "├─ 1",
                "└─ *",
                "   ├─ ( )",
                "   │  └─ +",
                "   │     ├─ 2",
                "   │     └─ 3",
                "   └─ 4",
            ]
        );
    }

    #[test]
    fn test_one_line_per_node() {
        let expr = parse_str("(1*2)+(3*(4+5))").unwrap();
        let lines = outline(&expr);
        assert_eq!(lines.len(), expr.node_count());
        assert_eq!(lines.iter().map(|l| l.depth).max(), Some(expr.depth() - 1));
        assert_eq!(lines[0].kind, OutlineKind::Operator(BinOp::Add));
        assert_eq!(lines[1].kind, OutlineKind::Group);
    }
}
