//! Arithmetic expression front end
//!
//! This module transforms source text into an expression tree:
//! - [`token`]: Token definitions
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser state, cursor primitives and errors (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Accepted input
//!
//! Non-negative decimal integers, `+`, `*`, parentheses and whitespace
//! (space, tab, CR, LF). Anything else is rejected by the lexer.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser; `*` binds tighter than `+` and both
//! are left-associative. The first error aborts the parse.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod token;

use std::fmt;

use ast::Expr;
use lexer::LexError;
use parse::ParseError;

/// Any error the tokenize → parse pipeline can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendError::Lex(err) => write!(f, "Lexer error: {}", err),
            FrontendError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for FrontendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrontendError::Lex(err) => Some(err),
            FrontendError::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for FrontendError {
    fn from(err: LexError) -> Self {
        FrontendError::Lex(err)
    }
}

impl From<ParseError> for FrontendError {
    fn from(err: ParseError) -> Self {
        FrontendError::Parse(err)
    }
}

/// Tokenize and parse `source` in one step.
pub fn parse_str(source: &str) -> Result<Expr, FrontendError> {
    let tokens = lexer::tokenize(source)?;
    Ok(parse::parse(&tokens)?)
}
