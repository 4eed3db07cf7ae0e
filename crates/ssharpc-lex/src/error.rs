use ssharpc_util::Span;
use thiserror::Error;

/// Lexical errors. All are fatal — the lexer never recovers past one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A buffered run of bytes was neither `if`, a lowercase identifier,
    /// nor a parseable decimal literal.
    #[error("unknown token type: {text:?}")]
    UnknownTokenType { text: String, span: Span },

    /// `=`, `!`, `|`, or `&` was not followed by the byte required to form
    /// `==`, `!=`, `||`, or `&&`.
    #[error("invalid occurrence of '{first}', must be '{first}{expected}'")]
    IncompleteOperator {
        first: char,
        expected: char,
        span: Span,
    },

    /// `=`, `!`, `|`, or `&` was the last byte of the stream.
    #[error("unexpected end of input after '{first}', expected '{first}{expected}'")]
    UnexpectedEof { first: char, expected: char },
}
