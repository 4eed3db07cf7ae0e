//! Function table: the translation-wide, insert-only map from function
//! name to declared parameter count, shared across the whole translation.

use rustc_hash::FxHashMap;
use ssharpc_util::Symbol;

pub struct FuncTable {
    arities: FxHashMap<Symbol, usize>,
}

impl FuncTable {
    /// Pre-seeded with the two built-ins, `write/1` and `read/0`.
    pub fn new() -> Self {
        let mut arities = FxHashMap::default();
        arities.insert(Symbol::intern("write"), 1);
        arities.insert(Symbol::intern("read"), 0);
        Self { arities }
    }

    /// Inserts `name` with the given arity. Returns `false` if `name` was
    /// already present (the caller turns that into `DuplicateFunction`).
    pub fn declare(&mut self, name: Symbol, arity: usize) -> bool {
        if self.arities.contains_key(&name) {
            return false;
        }
        self.arities.insert(name, arity);
        true
    }

    pub fn arity_of(&self, name: Symbol) -> Option<usize> {
        self.arities.get(&name).copied()
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.arities.contains_key(&name)
    }
}

impl Default for FuncTable {
    fn default() -> Self {
        Self::new()
    }
}
