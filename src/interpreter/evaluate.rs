//! Integer evaluation of expression trees
//!
//! Values are `u64`. [`evaluate`] wraps on overflow (modulo 2^64) in every
//! build profile; [`checked_evaluate`] reports the first overflowing
//! operation instead.

use crate::interpreter::errors::EvalError;
use crate::parser::ast::{BinOp, Expr};

/// Evaluate `expr`, wrapping around on overflow.
pub fn evaluate(expr: &Expr) -> u64 {
    match expr {
        Expr::BinaryOp { op, left, right } => {
            let a = evaluate(left);
            let b = evaluate(right);
            match op {
                BinOp::Add => a.wrapping_add(b),
                BinOp::Mul => a.wrapping_mul(b),
            }
        }
        Expr::Paren(inner) => evaluate(inner),
        Expr::Number(value) => *value,
    }
}

/// Evaluate `expr`, failing on the first operation that overflows `u64`.
///
/// The left operand is evaluated before the right, so the reported
/// operation is the leftmost innermost one.
pub fn checked_evaluate(expr: &Expr) -> Result<u64, EvalError> {
    match expr {
        Expr::BinaryOp { op, left, right } => {
            let a = checked_evaluate(left)?;
            let b = checked_evaluate(right)?;
            let result = match op {
                BinOp::Add => a.checked_add(b),
                BinOp::Mul => a.checked_mul(b),
            };
            result.ok_or(EvalError::IntegerOverflow {
                operator: *op,
                left: a,
                right: b,
            })
        }
        Expr::Paren(inner) => checked_evaluate(inner),
        Expr::Number(value) => Ok(*value),
    }
}
