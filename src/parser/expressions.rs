//! Expression grammar
//!
//! ```text
//! expr    = term
//! term    = factor ( "+" factor )*
//! factor  = primary ( "*" primary )*
//! primary = NUMBER | "(" expr ")"
//! ```
//!
//! Precedence is structural: `term` only combines `factor` results, so a `*`
//! chain is always reduced to a single node before `+` can take it as an
//! operand. Each repetition loop folds to the left, making both operators
//! left-associative (`1+2+3` parses as `(1+2)+3`).
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{BinOp, Expr};
use crate::parser::parse::{Expected, ParseError, Parser};
use crate::parser::token::{Token, TokenKind};

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_term()
    }

    /// Parse addition (+)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while self.peek() == Token::Plus {
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::binary(BinOp::Add, left, right);
        }

        Ok(left)
    }

    /// Parse multiplication (*)
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while self.peek() == Token::Star {
            self.advance();
            let right = self.parse_primary()?;
            left = Expr::binary(BinOp::Mul, left, right);
        }

        Ok(left)
    }

    /// Parse a number literal or a parenthesized expression
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number(value))
            }
            Token::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::paren(inner))
            }
            _ => Err(self.unexpected(Expected::Rule("primary expression"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{BinOp, Expr};
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::{parse, Expected, ParseError};
    use crate::parser::token::TokenKind;

    fn parse_source(source: &str) -> Result<Expr, ParseError> {
        let tokens = tokenize(source).expect("lexing failed");
        parse(&tokens)
    }

    fn num(n: u64) -> Expr {
        Expr::Number(n)
    }

    #[test]
    fn test_single_number() {
        assert_eq!(parse_source("42").unwrap(), num(42));
    }

    #[test]
    fn test_addition_is_left_associative() {
        let expected = Expr::binary(
            BinOp::Add,
            Expr::binary(BinOp::Add, num(1), num(2)),
            num(3),
        );
        assert_eq!(parse_source("1+2+3").unwrap(), expected);
    }

    #[test]
    fn test_multiplication_is_left_associative() {
        let expected = Expr::binary(
            BinOp::Mul,
            Expr::binary(BinOp::Mul, num(2), num(3)),
            num(4),
        );
        assert_eq!(parse_source("2*3*4").unwrap(), expected);
    }

    #[test]
    fn test_star_binds_tighter() {
        let expected = Expr::binary(
            BinOp::Add,
            num(1),
            Expr::binary(BinOp::Mul, num(2), num(3)),
        );
        assert_eq!(parse_source("1+2*3").unwrap(), expected);

        let expected = Expr::binary(
            BinOp::Add,
            Expr::binary(BinOp::Mul, num(1), num(2)),
            num(3),
        );
        assert_eq!(parse_source("1*2+3").unwrap(), expected);
    }

    #[test]
    fn test_grouping_is_recorded() {
        let expected = Expr::binary(
            BinOp::Mul,
            Expr::paren(Expr::binary(BinOp::Add, num(1), num(2))),
            num(3),
        );
        assert_eq!(parse_source("(1+2)*3").unwrap(), expected);
        assert_eq!(parse_source("((7))").unwrap(), Expr::paren(Expr::paren(num(7))));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_source("").unwrap_err(),
            ParseError::UnexpectedToken {
                found: TokenKind::Eof,
                expected: Expected::Rule("primary expression"),
            }
        );
    }

    #[test]
    fn test_missing_rparen() {
        assert_eq!(
            parse_source("(1+2").unwrap_err(),
            ParseError::UnexpectedToken {
                found: TokenKind::Eof,
                expected: Expected::Token(TokenKind::RParen),
            }
        );
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(
            parse_source("1 2").unwrap_err(),
            ParseError::UnexpectedToken {
                found: TokenKind::Number,
                expected: Expected::Token(TokenKind::Eof),
            }
        );
        assert_eq!(
            parse_source("1)").unwrap_err(),
            ParseError::UnexpectedToken {
                found: TokenKind::RParen,
                expected: Expected::Token(TokenKind::Eof),
            }
        );
    }

    #[test]
    fn test_dangling_operator() {
        assert!(matches!(
            parse_source("1+"),
            Err(ParseError::UnexpectedToken {
                found: TokenKind::Eof,
                expected: Expected::Rule(_),
            })
        ));
        assert!(matches!(
            parse_source("*2"),
            Err(ParseError::UnexpectedToken {
                found: TokenKind::Star,
                ..
            })
        ));
        assert!(parse_source("()").is_err());
    }
}
