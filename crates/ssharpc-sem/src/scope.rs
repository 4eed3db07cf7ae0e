//! Variable scope.
//!
//! SourceLang has no block scoping, shadowing, or nested `let`-style
//! bindings: a function body is one expression over exactly its own
//! parameters. A scope is therefore just the flat, immutable set of a
//! function's parameter names, built once and read-only for the rest of
//! that function's translation.

use rustc_hash::FxHashSet;
use ssharpc_util::Symbol;

#[derive(Debug, Default)]
pub struct VarScope {
    names: FxHashSet<Symbol>,
}

impl VarScope {
    /// Builds a scope from a parameter list. Returns the first name that
    /// repeats, if any — the caller turns that into a `DuplicateParam`
    /// error without this module needing to know about `TranslateError`.
    pub fn from_params(params: impl IntoIterator<Item = Symbol>) -> Result<Self, Symbol> {
        let mut names = FxHashSet::default();
        for name in params {
            if !names.insert(name) {
                return Err(name);
            }
        }
        Ok(Self { names })
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.names.contains(&name)
    }
}
