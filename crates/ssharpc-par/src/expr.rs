//! Expression grammar: the six binary-precedence levels plus `BASIC`.
//!
//! Each level follows the same shape: parse the next-tighter level as an
//! *optional* alternative; if it's absent, the whole level is absent too
//! (`Ok(None)`) and propagates upward with the cursor wherever it landed.
//! If present, loop consuming this level's operator(s) left-associatively,
//! requiring a right operand after each one (`MissingSecondOperand` if it's
//! missing — there is no recovery past that point).
//!
//! `BASIC`'s two unary forms are the one place this crate deliberately
//! does *not* restore the cursor on failure: if `~` or `-` is consumed and
//! the operand that should follow turns out absent, a hard error propagates
//! straight up without rewinding past the consumed operator token — once a
//! unary operator's token is consumed, its operand is no longer optional.

use crate::ast::{BinOp, Node, UnOp};
use crate::error::ParseError;
use crate::Parser;
use ssharpc_lex::Token;

impl Parser {
    /// `DISJ := CONJ { '||' CONJ }`
    pub(crate) fn parse_disj(&mut self) -> Result<Option<Node>, ParseError> {
        self.parse_binop_level(Self::parse_conj, &[(Token::Or, BinOp::Or)])
    }

    /// `CONJ := EQ { '&&' EQ }`
    fn parse_conj(&mut self) -> Result<Option<Node>, ParseError> {
        self.parse_binop_level(Self::parse_eq, &[(Token::And, BinOp::And)])
    }

    /// `EQ := ORDER { ('==' | '!=') ORDER }`
    fn parse_eq(&mut self) -> Result<Option<Node>, ParseError> {
        self.parse_binop_level(
            Self::parse_order,
            &[(Token::Equal, BinOp::Equal), (Token::Nequal, BinOp::Nequal)],
        )
    }

    /// `ORDER := ADD { ('<' | '>') ADD }`
    fn parse_order(&mut self) -> Result<Option<Node>, ParseError> {
        self.parse_binop_level(
            Self::parse_add,
            &[(Token::Less, BinOp::Less), (Token::More, BinOp::More)],
        )
    }

    /// `ADD := MULT { ('+' | '-') MULT }`
    fn parse_add(&mut self) -> Result<Option<Node>, ParseError> {
        self.parse_binop_level(
            Self::parse_mult,
            &[(Token::Plus, BinOp::Plus), (Token::Minus, BinOp::Minus)],
        )
    }

    /// `MULT := BASIC { ('*' | '/' | '%') BASIC }`
    fn parse_mult(&mut self) -> Result<Option<Node>, ParseError> {
        self.parse_binop_level(
            Self::parse_basic,
            &[
                (Token::Mult, BinOp::Mult),
                (Token::Div, BinOp::Div),
                (Token::Mod, BinOp::Mod),
            ],
        )
    }

    /// Shared left-associative binary-level driver. `child` parses the
    /// next-tighter level; `ops` lists the tokens this level accepts,
    /// paired with the `BinOp` they build.
    fn parse_binop_level(
        &mut self,
        child: fn(&mut Self) -> Result<Option<Node>, ParseError>,
        ops: &[(Token, BinOp)],
    ) -> Result<Option<Node>, ParseError> {
        let mut left = match child(self)? {
            Some(node) => node,
            None => return Ok(None),
        };

        loop {
            let matched = ops.iter().find(|(tok, _)| self.check(tok));
            let Some((_, op)) = matched else {
                break;
            };
            let op = *op;
            self.advance();

            let right = child(self)?.ok_or(ParseError::MissingSecondOperand)?;
            left = Node::BinOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(Some(left))
    }

    /// `BASIC := '~' BASIC | '-' BASIC | IF | FCALL | Number | Identifier
    ///         | '(' DISJ ')' | BRPROG`
    pub(crate) fn parse_basic(&mut self) -> Result<Option<Node>, ParseError> {
        if self.check(&Token::Neg) {
            self.advance();
            let operand = self.parse_basic()?.ok_or(ParseError::MissingSecondOperand)?;
            return Ok(Some(Node::UnOp {
                op: UnOp::Neg,
                operand: Box::new(operand),
            }));
        }
        if self.check(&Token::Minus) {
            self.advance();
            let operand = self.parse_basic()?.ok_or(ParseError::MissingSecondOperand)?;
            return Ok(Some(Node::UnOp {
                op: UnOp::Minus,
                operand: Box::new(operand),
            }));
        }

        if let Some(node) = self.parse_if()? {
            return Ok(Some(node));
        }

        if let Some(node) = self.parse_fcall()? {
            return Ok(Some(node));
        }

        if let Some(Token::Number(value)) = self.peek() {
            let value = *value;
            self.advance();
            return Ok(Some(Node::Number(value)));
        }

        if let Some(Token::Identifier(sym)) = self.peek() {
            let sym = *sym;
            let span = self.span_here();
            self.advance();
            return Ok(Some(Node::Identifier(sym, span)));
        }

        if self.check(&Token::LPar) {
            self.advance();
            let inner = self
                .parse_disj()?
                .ok_or(ParseError::InvalidParenthesizedExpr)?;
            self.expect(&Token::RPar, ParseError::MissingClosingParen)?;
            return Ok(Some(inner));
        }

        if let Some(node) = self.parse_brprog()? {
            return Ok(Some(node));
        }

        Ok(None)
    }
}
