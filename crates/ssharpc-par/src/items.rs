//! Structural grammar productions: `SOURCE`, `FDEF`, `PARAMS`, `BRPROG`,
//! `PROG`, `IF`, `FCALL`, `ARGS`.

use crate::ast::{Arguments, Node, Params};
use crate::error::ParseError;
use crate::Parser;
use ssharpc_lex::Token;
use ssharpc_util::Symbol;

impl Parser {
    /// `SOURCE := FDEF [ SOURCE ]`
    ///
    /// Builds a right-leaning chain of `Source` nodes so that `FuncDef`s
    /// translate left-to-right, letting earlier definitions land in the
    /// function table before later ones are checked against it.
    pub(crate) fn parse_source(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_fdef()?;
        if self.is_at_end() {
            return Ok(left);
        }
        let right = self.parse_source()?;
        Ok(Node::Source(Box::new(left), Box::new(right)))
    }

    /// `FDEF := Identifier PARAMS BRPROG`
    fn parse_fdef(&mut self) -> Result<Node, ParseError> {
        let name_span = self.span_here();
        let name = match self.peek() {
            Some(Token::Identifier(sym)) => {
                let sym = *sym;
                self.advance();
                sym
            }
            _ => return Err(ParseError::ExpectedFunctionDefinition),
        };

        let params = self.parse_params();
        let body = self
            .parse_brprog()?
            .ok_or(ParseError::MissingFunctionBody)?;

        Ok(Node::FuncDef {
            name,
            name_span,
            params,
            body: Box::new(body),
        })
    }

    /// `PARAMS := { Identifier }`
    ///
    /// Always succeeds, possibly with an empty list. Duplicate-name and
    /// function-name-collision checks happen during translation, not here
    /// (the parser doesn't know the function table).
    fn parse_params(&mut self) -> Params {
        let mut names = Vec::new();
        while let Some(Token::Identifier(sym)) = self.peek() {
            let sym = *sym;
            let span = self.span_here();
            self.advance();
            names.push((sym, span));
        }
        Params { names }
    }

    /// `BRPROG := '{' PROG '}'`
    ///
    /// An *optional* alternative: if the next token isn't `{`, returns
    /// `Ok(None)` without moving the cursor. Once `{` is consumed, a `PROG`
    /// and closing `}` are mandatory.
    pub(crate) fn parse_brprog(&mut self) -> Result<Option<Node>, ParseError> {
        if !self.check(&Token::LBrace) {
            return Ok(None);
        }
        self.advance();

        let prog = self.parse_prog()?.ok_or(ParseError::EmptyBlockBody)?;
        self.expect(&Token::RBrace, ParseError::MissingClosingBrace)?;
        Ok(Some(Node::BrProg(Box::new(prog))))
    }

    /// `PROG := DISJ [ ';' PROG ] | BRPROG`
    pub(crate) fn parse_prog(&mut self) -> Result<Option<Node>, ParseError> {
        let checkpoint = self.checkpoint();
        if let Some(left) = self.parse_disj()? {
            if !self.check(&Token::Semicolon) {
                return Ok(Some(left));
            }
            self.advance();
            return match self.parse_prog()? {
                Some(right) => Ok(Some(Node::Prog(Box::new(left), Box::new(right)))),
                // A trailing ';' with nothing meaningful after it (e.g.
                // immediately before the closing '}') is tolerated: the
                // sequence degrades to just `left`.
                None => Ok(Some(left)),
            };
        }
        self.restore(checkpoint);
        self.parse_brprog()
    }

    /// `IF := 'if' '(' (DISJ | BRPROG) ')' BRPROG BRPROG`
    pub(crate) fn parse_if(&mut self) -> Result<Option<Node>, ParseError> {
        if !self.check(&Token::If) {
            return Ok(None);
        }
        self.advance();

        self.expect(&Token::LPar, ParseError::MissingIfOpenParen)?;

        let cond = match self.parse_disj()? {
            Some(cond) => cond,
            None => self
                .parse_brprog()?
                .ok_or(ParseError::MissingIfCondition)?,
        };

        self.expect(&Token::RPar, ParseError::MissingIfCloseParen)?;

        let then_branch = self
            .parse_brprog()?
            .ok_or(ParseError::MissingIfThenBranch)?;
        let else_branch = self
            .parse_brprog()?
            .ok_or(ParseError::MissingIfElseBranch)?;

        Ok(Some(Node::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }))
    }

    /// `FCALL := Identifier '(' ARGS ')'`
    ///
    /// Tries the call shape first; if the identifier isn't followed by
    /// `(`, restores the cursor so the caller can reparse the identifier
    /// as a plain variable reference instead.
    pub(crate) fn parse_fcall(&mut self) -> Result<Option<Node>, ParseError> {
        let checkpoint = self.checkpoint();

        let (name, name_span) = match self.peek() {
            Some(Token::Identifier(sym)) => (*sym, self.span_here()),
            _ => return Ok(None),
        };
        self.advance();

        if !self.check(&Token::LPar) {
            self.restore(checkpoint);
            return Ok(None);
        }
        self.advance();

        let args = self.parse_args()?;
        self.expect(&Token::RPar, ParseError::MissingCallCloseParen)?;

        Ok(Some(Node::FuncCall {
            name,
            name_span,
            args,
        }))
    }

    /// `ARGS := [ DISJ { ',' DISJ } ]`
    fn parse_args(&mut self) -> Result<Arguments, ParseError> {
        let mut items = Vec::new();
        let mut trailing_comma = false;

        while let Some(expr) = self.parse_disj()? {
            items.push(expr);
            trailing_comma = false;
            if self.check(&Token::Comma) {
                self.advance();
                trailing_comma = true;
            }
        }

        if trailing_comma {
            return Err(ParseError::TrailingComma);
        }

        Ok(Arguments { items })
    }
}

#[allow(unused)]
fn intern_builtin_names() {
    // Keeps `write`/`read` as a visible anchor for readers grepping for
    // how built-ins enter the function table — the actual insertion lives
    // in ssharpc-sem, not the parser.
    let _ = (Symbol::intern("write"), Symbol::intern("read"));
}
