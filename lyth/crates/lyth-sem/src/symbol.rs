//! The ordered binary tree of declared symbols, keyed by `(name, scope)`,
//! and the process-wide registry of its top-level roots.
//!
//! Each scope is a single binary tree ordered lexicographically on
//! `(name, scope)`, so the tree is a plain owned-`Box` binary search tree
//! rather than an arena of parent-pointer-linked scope ribs. The registry
//! of per-scope roots is keyed with the `IndexVec`/`Idx` typed-index
//! pattern, so one root tree cannot be looked up with another's id.

use rustc_hash::FxHashMap;

use lyth_util::index_vec::IndexVec;
use lyth_util::{define_idx, index_vec::Idx};

use crate::value::Value;

define_idx!(RootId);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}

/// `{type_tag, mutability, value}` from the data model; `type_tag` is left
/// implicit (a value's own variant already says what it is), so only
/// mutability and value are tracked, both `Option` to model the `UNKNOWN`
/// sentinel before a symbol is ever assigned.
#[derive(Clone, Debug, Default)]
pub struct SymbolType {
    pub mutability: Option<Mutability>,
    pub value: Option<Value>,
}

/// One node of the ordered binary tree. `address`/`size` are carried
/// verbatim from the data model though nothing in this pipeline stage
/// assigns them a meaning yet.
#[derive(Debug)]
pub struct SymbolName {
    pub name: String,
    pub scope: String,
    pub kind: SymbolType,
    pub address: usize,
    pub size: usize,
    left: Option<Box<SymbolName>>,
    right: Option<Box<SymbolName>>,
}

impl SymbolName {
    fn new(name: String, scope: String) -> Self {
        Self {
            name,
            scope,
            kind: SymbolType::default(),
            address: 0,
            size: 0,
            left: None,
            right: None,
        }
    }

    fn key(&self) -> (&str, &str) {
        (&self.name, &self.scope)
    }

    /// Inserts `(name, scope)` if absent and returns the node either way —
    /// a duplicate insert collapses to the existing node rather than
    /// creating a sibling.
    pub fn insert(&mut self, name: &str, scope: &str) -> &mut SymbolName {
        use std::cmp::Ordering::*;
        match (name, scope).cmp(&self.key()) {
            Equal => self,
            Less => self
                .left
                .get_or_insert_with(|| Box::new(SymbolName::new(name.to_string(), scope.to_string())))
                .insert(name, scope),
            Greater => self
                .right
                .get_or_insert_with(|| Box::new(SymbolName::new(name.to_string(), scope.to_string())))
                .insert(name, scope),
        }
    }

    pub fn find(&self, name: &str, scope: &str) -> Option<&SymbolName> {
        use std::cmp::Ordering::*;
        match (name, scope).cmp(&self.key()) {
            Equal => Some(self),
            Less => self.left.as_deref().and_then(|l| l.find(name, scope)),
            Greater => self.right.as_deref().and_then(|r| r.find(name, scope)),
        }
    }

    pub fn find_mut(&mut self, name: &str, scope: &str) -> Option<&mut SymbolName> {
        use std::cmp::Ordering::*;
        match (name, scope).cmp(&self.key()) {
            Equal => Some(self),
            Less => self.left.as_deref_mut().and_then(|l| l.find_mut(name, scope)),
            Greater => self.right.as_deref_mut().and_then(|r| r.find_mut(name, scope)),
        }
    }

    /// Detaches and drops the subtree rooted at `(name, scope)` without
    /// re-attaching its children elsewhere, accepting the data loss.
    /// Returns whether a matching node was found anywhere under `self`
    /// (the root itself cannot be deleted this way, since it has no parent
    /// link to clear).
    pub fn delete(&mut self, name: &str, scope: &str) -> bool {
        use std::cmp::Ordering::*;
        match (name, scope).cmp(&self.key()) {
            Equal => false,
            Less => match &mut self.left {
                Some(node) if (name, scope) == node.key() => {
                    self.left = None;
                    true
                }
                Some(node) => node.delete(name, scope),
                None => false,
            },
            Greater => match &mut self.right {
                Some(node) if (name, scope) == node.key() => {
                    self.right = None;
                    true
                }
                Some(node) => node.delete(name, scope),
                None => false,
            },
        }
    }

    /// In-order traversal of `(name, scope)` keys, lexicographic ordering.
    pub fn in_order(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.in_order_into(&mut out);
        out
    }

    fn in_order_into<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        if let Some(l) = &self.left {
            l.in_order_into(out);
        }
        out.push(self.key());
        if let Some(r) = &self.right {
            r.in_order_into(out);
        }
    }
}

/// The process-wide registry of per-scope root trees, modeled as an
/// explicit value rather than a `static`: calling [`SymbolRootRegistry::root`]
/// for an already-present `(name, scope)` returns the existing tree instead
/// of creating a new one.
///
/// A multi-threaded driver sharing one registry across concurrent pipelines
/// must wrap it in a `Mutex` itself — this type stays `!Sync` by default.
#[derive(Default)]
pub struct SymbolRootRegistry {
    roots: IndexVec<RootId, SymbolName>,
    index: FxHashMap<(String, String), RootId>,
}

impl SymbolRootRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, name: &str, scope: &str) -> &mut SymbolName {
        let key = (name.to_string(), scope.to_string());
        if let Some(&id) = self.index.get(&key) {
            return self.roots.get_mut(id).expect("registry index never outlives its IndexVec entry");
        }
        let id = self.roots.push(SymbolName::new(name.to_string(), scope.to_string()));
        self.index.insert(key, id);
        self.roots.get_mut(id).expect("just inserted")
    }
}
