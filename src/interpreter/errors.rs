//! Evaluation error types
//!
//! Plain [`evaluate`](super::evaluate::evaluate) is total and never fails;
//! [`EvalError`] is only produced by
//! [`checked_evaluate`](super::evaluate::checked_evaluate).

use crate::parser::ast::BinOp;
use std::fmt;

/// Errors that can occur during checked evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Result of `left op right` does not fit in `u64`
    IntegerOverflow { operator: BinOp, left: u64, right: u64 },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::IntegerOverflow {
                operator,
                left,
                right,
            } => write!(f, "integer overflow in {} {} {}", left, operator, right),
        }
    }
}

impl std::error::Error for EvalError {}
