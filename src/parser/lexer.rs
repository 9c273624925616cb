//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The cursor only ever moves forward; whitespace is skipped and never emitted.

use super::token::Token;
use std::fmt;

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the digit, operator, bracket and whitespace classes
    UnexpectedCharacter { character: char, position: usize },

    /// A digit run too large for `u64`
    InvalidIntegerLiteral { literal: String, position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "unexpected character '{}' at index {}",
                character.escape_debug(),
                position
            ),
            LexError::InvalidIntegerLiteral { literal, position } => write!(
                f,
                "integer literal {} at index {} is out of range",
                literal, position
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize `input` in one call.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

/// Lexer for arithmetic source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if let Some(token) = Token::from_symbol(ch) {
                tokens.push(token);
                self.advance();
                continue;
            }

            if let Some(token) = self.number_literal()? {
                tokens.push(token);
                continue;
            }

            if self.skip_whitespace() {
                continue;
            }

            return Err(LexError::UnexpectedCharacter {
                character: ch,
                position: self.position,
            });
        }

        tokens.push(Token::Eof);
        Ok(tokens)
    }

    /// Parse a maximal run of decimal digits, if one starts here.
    ///
    /// Leading zeros are accepted: `007` lexes as `7`.
    fn number_literal(&mut self) -> Result<Option<Token>, LexError> {
        let start = self.position;
        let digits = self.accumulate(|ch| ch.is_ascii_digit());
        if digits.is_empty() {
            return Ok(None);
        }

        let value = digits
            .parse::<u64>()
            .map_err(|_| LexError::InvalidIntegerLiteral {
                literal: digits.clone(),
                position: start,
            })?;

        Ok(Some(Token::Number(value)))
    }

    /// Skip a run of whitespace. Returns whether anything was skipped.
    fn skip_whitespace(&mut self) -> bool {
        !self
            .accumulate(|ch| matches!(ch, ' ' | '\t' | '\r' | '\n'))
            .is_empty()
    }

    /// Consume characters while `pred` holds and return them.
    fn accumulate(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut run = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            run.push(ch);
            self.advance();
        }
        run
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_tokens() {
        let tokens = tokenize("1 + (2+3)  *  4").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Number(1),
                Token::Plus,
                Token::LParen,
                Token::Number(2),
                Token::Plus,
                Token::Number(3),
                Token::RParen,
                Token::Star,
                Token::Number(4),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap(), vec![Token::Eof]);
        assert_eq!(tokenize(" \t\r\n").unwrap(), vec![Token::Eof]);
    }

    #[test]
    fn test_multi_digit_and_leading_zero() {
        let tokens = tokenize("123*007").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Number(123), Token::Star, Token::Number(7), Token::Eof]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("1+2 &").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: '&',
                position: 4
            }
        );
        assert_eq!(err.to_string(), "unexpected character '&' at index 4");
    }

    #[test]
    fn test_rejects_unsupported_operators() {
        assert!(matches!(
            tokenize("3-1"),
            Err(LexError::UnexpectedCharacter { character: '-', .. })
        ));
        assert!(matches!(
            tokenize("1.5"),
            Err(LexError::UnexpectedCharacter { character: '.', .. })
        ));
    }

    #[test]
    fn test_position_counts_characters_not_bytes() {
        let err = tokenize("é").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                character: 'é',
                position: 0
            }
        );
    }

    #[test]
    fn test_literal_out_of_range() {
        let err = tokenize("1 + 99999999999999999999").unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidIntegerLiteral { position: 4, .. }
        ));
    }

    #[test]
    fn test_max_literal() {
        let tokens = tokenize("18446744073709551615").unwrap();
        assert_eq!(tokens[0], Token::Number(u64::MAX));
    }
}
