//! ssharpc-lex - lexical analyzer.
//!
//! ============================================================================
//! LEXICAL ANALYSIS
//! ============================================================================
//!
//! Transforms the raw byte stream of a SourceLang program into an ordered
//! token sequence. The alphabet is small and entirely ASCII: lowercase
//! identifiers, decimal literals, the keyword `if`, and a fixed set of
//! single- and double-byte operators/punctuation. There is no whitespace-
//! significance, no comments, and no string literals to speak of — the
//! whole lexer is one buffer-then-delimiter loop (see [`lexer`]).

mod cursor;
mod error;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use token::Token;
