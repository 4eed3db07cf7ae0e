//! ssharpc-par - recursive-descent parser.
//!
//! ============================================================================
//! PARSER OVERVIEW
//! ============================================================================
//!
//! Hand-written recursive descent over the token vector produced by
//! `ssharpc-lex`, using precedence climbing for the six levels of binary
//! operator (see [`expr`]). The parser carries a single read cursor — an
//! index into the token vector — rather than consuming an iterator, because
//! several productions need to try an alternative and, on failure, resume
//! from exactly where they started (see `Parser::checkpoint`/`restore`).
//!
//! Two outcomes exist for a parse attempt:
//! - an **optional** alternative returns `Ok(None)` and leaves the cursor
//!   wherever it happened to land (the caller restores it if needed);
//! - a **required** element that is missing returns `Err(ParseError)` and
//!   aborts the parse outright. There is no error recovery past this point —
//!   keeping these two outcomes distinct is the whole trick to a
//!   backtracking recursive-descent parser that can't loop forever.
//!
//! Module layout mirrors the grammar's two halves: [`items`] parses the
//! structural, statement-like non-terminals (`SOURCE`, `FDEF`, `PARAMS`,
//! `BRPROG`, `PROG`, `IF`, `FCALL`, `ARGS`), and [`expr`] parses the six
//! binary-precedence levels plus `BASIC`.

mod ast;
mod error;
mod expr;
mod items;

pub use ast::{Arguments, BinOp, Node, Params, UnOp};
pub use error::ParseError;

use ssharpc_lex::Token;
use ssharpc_util::Span;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// A cheap stand-in for a byte span: the lexer discards byte offsets
    /// once a token is produced, and diagnostics here only need to name
    /// *what* went wrong, not precisely *where* (position info is
    /// optional per the front-end's non-goals). The token index is enough
    /// to make error messages distinguishable across a program.
    fn span_here(&self) -> Span {
        Span::new(self.pos as u32, self.pos as u32 + 1)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn check(&self, tok: &Token) -> bool {
        self.peek() == Some(tok)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn checkpoint(&self) -> usize {
        self.pos
    }

    fn restore(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    fn expect(&mut self, tok: &Token, on_missing: ParseError) -> Result<(), ParseError> {
        if self.check(tok) {
            self.advance();
            Ok(())
        } else {
            Err(on_missing)
        }
    }
}

/// Parses a complete token stream into the AST rooted at a `Source` chain
/// (or a lone `FuncDef` when the program has exactly one function).
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens);
    if parser.is_at_end() {
        return Err(ParseError::ExpectedFunctionDefinition);
    }
    let root = parser.parse_source()?;
    if !parser.is_at_end() {
        return Err(ParseError::UnexpectedTrailingTokens);
    }
    Ok(root)
}
