//! The abstract syntax tree and its arity-based leaf-access contract.
//!
//! A node's children are either a one-tuple (a leaf, accessed via
//! [`AstNode::value`]) or a two-tuple (an internal node, accessed via
//! [`AstNode::left`]/[`AstNode::right`]); calling the wrong accessor is a
//! parser-internal programming error, surfaced as a panic rather than
//! threaded through `Result` the way source-level errors are — no
//! well-formed tree ever calls the wrong one.

use lyth_util::{SourceOrigin, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AstKind {
    Num,
    Name,
    Add,
    Sub,
    Mul,
    Div,
    Floor,
    MutableAssign,
    ImmutableAssign,
    Let,
    Class,
    Type,
    Doc,
    Noop,
}

#[derive(Clone, Debug)]
pub enum Lexeme {
    Int(i64),
    Name(Symbol),
    Doc(Symbol),
    None,
}

/// One node of the AST. `kind` determines which shape `children` is in:
/// `Leaf` for `Num`/`Name`/`Doc`/`Noop`, `Binary` for the arithmetic and
/// assignment forms, `Seq` for the multi-part `Let`/`Class` forms.
#[derive(Clone, Debug)]
pub struct AstNode {
    pub kind: AstKind,
    pub origin: SourceOrigin,
    children: Children,
}

#[derive(Clone, Debug)]
enum Children {
    Leaf(Lexeme),
    Binary(Box<AstNode>, Box<AstNode>),
    Seq(Vec<AstNode>),
}

impl AstNode {
    pub fn leaf(kind: AstKind, lexeme: Lexeme, origin: SourceOrigin) -> Self {
        Self { kind, origin, children: Children::Leaf(lexeme) }
    }

    pub fn binary(kind: AstKind, origin: SourceOrigin, left: AstNode, right: AstNode) -> Self {
        Self {
            kind,
            origin,
            children: Children::Binary(Box::new(left), Box::new(right)),
        }
    }

    pub fn seq(kind: AstKind, origin: SourceOrigin, children: Vec<AstNode>) -> Self {
        Self { kind, origin, children: Children::Seq(children) }
    }

    /// Succeeds iff this node is a leaf with exactly one child value.
    pub fn value(&self) -> &Lexeme {
        match &self.children {
            Children::Leaf(lexeme) => lexeme,
            _ => panic!("value() called on non-leaf node {:?}", self.kind),
        }
    }

    /// Succeeds iff this node has exactly two children.
    pub fn left(&self) -> &AstNode {
        match &self.children {
            Children::Binary(l, _) => l,
            _ => panic!("left() called on node without two children: {:?}", self.kind),
        }
    }

    /// Succeeds iff this node has exactly two children.
    pub fn right(&self) -> &AstNode {
        match &self.children {
            Children::Binary(_, r) => r,
            _ => panic!("right() called on node without two children: {:?}", self.kind),
        }
    }

    /// The ordered children of a `Let`/`Class` form.
    pub fn items(&self) -> &[AstNode] {
        match &self.children {
            Children::Seq(items) => items,
            _ => panic!("items() called on node without a sequence: {:?}", self.kind),
        }
    }
}
