//! ssharpc-sem - fused semantic analyzer and C emitter.
//!
//! ============================================================================
//! OVERVIEW
//! ============================================================================
//!
//! One traversal does both jobs: each AST node checks itself against the
//! two environments threaded through translation — a per-function
//! [`VarScope`] and a translation-wide [`FuncTable`] — and, once it
//! passes, returns its own C text. There is no separate validation pass
//! followed by a separate codegen pass; a node's string is only ever
//! built after its own checks succeed, and a failing check short-circuits
//! the whole traversal with no partial output.
//!
//! There's exactly one implicit type (`u`, unsigned 64-bit), so nothing
//! downstream of "is this name valid" remains to check — a separate
//! type-checking or lowering pass would have nothing left to do.

mod error;
mod functable;
mod prelude;
mod scope;
mod translate;

pub use error::TranslateError;
pub use functable::FuncTable;
pub use prelude::PRELUDE;
pub use scope::VarScope;

use ssharpc_par::Node;
use ssharpc_util::Symbol;

/// Translates a complete AST into C body text (no prelude). Exposed
/// separately from [`emit`] so tests can check emitted fragments without
/// the prelude's boilerplate cluttering assertions.
pub fn translate(root: &Node) -> Result<String, TranslateError> {
    let mut translator = translate::Translator::new();
    let body = translator.translate_source(root)?;

    if !translator.functions().contains(Symbol::intern("main")) {
        return Err(TranslateError::MissingMain);
    }

    Ok(body)
}

/// Translates a complete AST and prepends the fixed C prelude, producing
/// the full program text this crate's consumer writes to stdout.
pub fn emit(root: &Node) -> Result<String, TranslateError> {
    let body = translate(root)?;
    Ok(format!("{PRELUDE}\n{body}"))
}
