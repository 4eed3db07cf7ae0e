//! ssharpc-drv - compiler driver.
//!
//! Wires the three phases together: lex, parse, translate-and-emit. The
//! driver owns no state of its own beyond the input buffer — everything
//! else lives inside the phase it belongs to (tokens in the lexer's
//! return value, the AST in the parser's, the function table and
//! variable scope inside the translator). There is deliberately no
//! `Config`/`Session` layer here: this compiler has no flags, no output
//! path selection, no incremental cache — only stdin in, stdout or
//! stderr out.

use thiserror::Error;

/// The union of every phase's error type. `#[error(transparent)]` means
/// this enum contributes no formatting of its own — the underlying
/// phase error's own `Display` impl is what reaches the user, so the
/// offending identifier named in a `TranslateError` (for example) still
/// shows up verbatim.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] ssharpc_lex::LexError),

    #[error(transparent)]
    Parse(#[from] ssharpc_par::ParseError),

    #[error(transparent)]
    Translate(#[from] ssharpc_sem::TranslateError),
}

/// Runs the full pipeline over a complete SourceLang program and returns
/// the C source text to write to stdout. Produces no output at all on
/// any error — callers must not write anything until this returns `Ok`.
pub fn compile(input: &[u8]) -> Result<String, CompileError> {
    let tokens = ssharpc_lex::tokenize(input)?;
    let ast = ssharpc_par::parse(tokens)?;
    let output = ssharpc_sem::emit(&ast)?;
    Ok(output)
}
