//! Consumers of the expression tree
//!
//! - [`render`]: canonical fully-parenthesized prefix form (`(+ 1 (* 2 3))`)
//! - [`evaluate`]: integer evaluation, wrapping or overflow-checked
//! - [`outline`]: indented node listing that keeps source grouping visible
//! - [`errors`]: [`EvalError`](errors::EvalError) for checked evaluation
//!
//! Every consumer matches each [`Expr`](crate::parser::ast::Expr) variant
//! explicitly, so adding a variant is a compile error until all of them
//! handle it.

pub mod errors;
pub mod evaluate;
pub mod outline;
pub mod render;

pub use errors::EvalError;
pub use evaluate::{checked_evaluate, evaluate};
pub use outline::{outline, OutlineLine};
pub use render::lispify;
