//! Token definitions shared by the lexer and the parser

use std::fmt;

/// All token variants produced by the lexer.
///
/// A token sequence always ends with exactly one [`Token::Eof`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(u64),
    Plus,   // +
    Star,   // *
    LParen, // (
    RParen, // )
    Eof,
}

impl Token {
    /// Returns the tag of this token, dropping any payload.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Plus => TokenKind::Plus,
            Token::Star => TokenKind::Star,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Maps one of the fixed single-character symbols to its marker token.
    pub fn from_symbol(ch: char) -> Option<Token> {
        match ch {
            '+' => Some(Token::Plus),
            '*' => Some(Token::Star),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Payload-free token tag, used when reporting what was found or expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Star,
    LParen,
    RParen,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
