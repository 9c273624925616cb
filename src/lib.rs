//! # Introduction
//!
//! arithtty parses arithmetic expressions over non-negative integers with
//! `+`, `*` and parentheses, renders the resulting tree in prefix form and
//! evaluates it. An interactive terminal UI built with
//! [ratatui](https://docs.rs/ratatui) shows the tokens, tree and value of each
//! submitted expression.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Expr → (prefix string | u64)
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an [`Expr`](parser::ast::Expr).
//! 2. [`interpreter`] — consumes the tree: [`lispify`](interpreter::lispify),
//!    [`evaluate`](interpreter::evaluate) and the outline used by the UI.
//! 3. [`session`] — bounded history of submissions with a result cache.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ```
//! use arithtty::interpreter::{evaluate, lispify};
//! use arithtty::parser::parse_str;
//!
//! let expr = parse_str("1 + (2+3) * 4").unwrap();
//! assert_eq!(lispify(&expr), "(+ 1 (* (+ 2 3) 4))");
//! assert_eq!(evaluate(&expr), 21);
//! ```

pub mod interpreter;
pub mod parser;
pub mod session;
pub mod ui;
