//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, the cursor primitives, and the parse entry point.
//!
//! # Implementation
//!
//! The grammar rules live in `expressions` as a separate `impl Parser` block,
//! sharing the cursor state defined here.

use crate::parser::ast::Expr;
use crate::parser::token::{Token, TokenKind};
use std::fmt;

/// What the parser was looking for when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token, e.g. the `)` closing a group
    Token(TokenKind),
    /// A grammar rule, e.g. "primary expression"
    Rule(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Rule(rule) => write!(f, "{}", rule),
        }
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken { found: TokenKind, expected: Expected },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { found, expected } => {
                write!(f, "expected {}, but got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token sequence produced by [`tokenize`](crate::parser::lexer::tokenize).
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}

/// Recursive descent parser over a token slice.
///
/// The slice must end with [`Token::Eof`]; the lexer always guarantees this.
/// Running off the end of an unterminated slice is a caller bug and panics.
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(Token::Eof)),
            "token sequence must end with Eof"
        );
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse one expression and require that it spans the whole input.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Eof)?;
        Ok(expr)
    }

    /// Peek at current token
    pub(crate) fn peek(&self) -> Token {
        match self.tokens.get(self.position) {
            Some(token) => *token,
            None => unreachable!(
                "parser ran past the end of the token sequence at index {}; \
                 the sequence was not terminated by Eof",
                self.position
            ),
        }
    }

    /// Consume and return the current token
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek();
        self.position += 1;
        token
    }

    /// Consume the current token if it has the expected tag
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let found = self.peek().kind();
        if found != kind {
            return Err(self.unexpected(Expected::Token(kind)));
        }
        Ok(self.advance())
    }

    pub(crate) fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.peek().kind(),
            expected,
        }
    }
}
