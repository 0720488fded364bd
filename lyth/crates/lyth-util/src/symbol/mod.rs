//! String interning for identifiers and keyword/text lexemes.
//!
//! [`Symbol`] is a compact `u32` handle into a [`StringTable`]; symbols
//! compare in O(1) and avoid repeated heap allocation for names that recur
//! across a source file (most identifiers do).

use std::fmt;

use rustc_hash::FxHashMap;

/// A handle into a [`StringTable`]. Two symbols are equal iff the strings
/// they were interned from are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Owns the backing storage for every interned string handed out as a
/// [`Symbol`]. One table is created per compilation/REPL session.
#[derive(Default)]
pub struct StringTable {
    strings: Vec<Box<str>>,
    lookup: FxHashMap<Box<str>, Symbol>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning the existing symbol if already seen.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(sym) = self.lookup.get(text) {
            return *sym;
        }
        let id = self.strings.len() as u32;
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        let sym = Symbol(id);
        self.lookup.insert(boxed, sym);
        sym
    }

    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}
