//! Symbol module - string interning for identifier and function names.
//!
//! A [`Symbol`] is a compact handle to an interned string: comparison is an
//! integer comparison rather than a byte-for-byte one, which matters because
//! every scope lookup and function-table lookup in the translator compares
//! names. This translator is single-threaded end to end (no suspension
//! points, no parallel phases), so the table below is a plain growable
//! vector behind a `RefCell` rather than a concurrent, process-wide map.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;

thread_local! {
    static INTERNER: RefCell<Interner> = RefCell::new(Interner::new());
}

struct Interner {
    strings: Vec<&'static str>,
    lookup: FxHashMap<&'static str, u32>,
}

impl Interner {
    fn new() -> Self {
        Self {
            strings: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.lookup.get(s) {
            return id;
        }
        // Leaked once per distinct name; the translator runs for a single,
        // short-lived invocation so this is bounded by source size.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let id = self.strings.len() as u32;
        self.strings.push(leaked);
        self.lookup.insert(leaked, id);
        id
    }

    fn resolve(&self, id: u32) -> &'static str {
        self.strings[id as usize]
    }
}

/// An interned name (an identifier, function name, or built-in name).
///
/// `Symbol`s from the same process compare equal iff their source strings
/// are equal; comparison and hashing never touch the underlying bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `s`, returning the `Symbol` for it.
    pub fn intern(s: &str) -> Self {
        INTERNER.with(|i| Symbol(i.borrow_mut().intern(s)))
    }

    /// Returns the original string for this symbol.
    pub fn as_str(self) -> &'static str {
        INTERNER.with(|i| i.borrow().resolve(self.0))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_interns_to_equal_symbol() {
        let a = Symbol::intern("write");
        let b = Symbol::intern("write");
        assert_eq!(a, b);
    }

    #[test]
    fn different_strings_intern_distinctly() {
        let a = Symbol::intern("read");
        let b = Symbol::intern("write");
        assert_ne!(a, b);
    }

    #[test]
    fn round_trips_through_as_str() {
        let s = Symbol::intern("main");
        assert_eq!(s.as_str(), "main");
    }
}
