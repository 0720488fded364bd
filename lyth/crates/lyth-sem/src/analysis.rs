//! Tree-walking evaluator: dispatches on `AstKind`, threads a `Load`/`Store`
//! evaluation context, and maintains the symbol table.
//!
//! `visit` dispatches on node kind with a plain exhaustive `match` over
//! [`AstKind`], rather than a reflection-style `visit_<kind>` lookup table.

use lyth_par::{AstKind, AstNode, Lexeme};
use lyth_util::error::LythErrorKind;
use lyth_util::{StringTable, SyntaxError};

use crate::symbol::{Mutability, SymbolName, SymbolRootRegistry};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Context {
    Load,
    Store,
}

/// Owns the symbol-table registry for one compilation/REPL session and
/// walks AST roots one at a time. Creates its own root symbol node keyed
/// `(filename, "root")` at construction.
pub struct Analyzer {
    registry: SymbolRootRegistry,
    filename: String,
}

impl Analyzer {
    /// `registry` is an explicit argument rather than a process `static`,
    /// so a driver running several independent files can pass a fresh
    /// registry, or share one across sessions to keep their roots in one
    /// table.
    pub fn new(filename: impl Into<String>, mut registry: SymbolRootRegistry) -> Self {
        let filename = filename.into();
        registry.root(&filename, "root");
        Self { registry, filename }
    }

    /// The root symbol node for this session's file scope, exposed for
    /// external inspection.
    pub fn root(&mut self) -> &mut SymbolName {
        self.registry.root(&self.filename, "root")
    }

    /// Visits one top-level AST root in `Load` context, returning the
    /// computed value (`None` for declarations: `Let`, `Class`,
    /// assignments, `Noop`, `Doc`).
    pub fn analyze(&mut self, node: &AstNode, table: &StringTable) -> Result<Option<Value>, SyntaxError> {
        self.visit(node, Context::Load, table)
    }

    fn visit(&mut self, node: &AstNode, ctx: Context, table: &StringTable) -> Result<Option<Value>, SyntaxError> {
        match node.kind {
            AstKind::Num => {
                let Lexeme::Int(n) = node.value() else {
                    unreachable!("Num node always carries an Int lexeme")
                };
                Ok(Some(Value::Int(*n)))
            }

            AstKind::Name => {
                let Lexeme::Name(sym) = node.value() else {
                    unreachable!("Name node always carries a Name lexeme")
                };
                match ctx {
                    Context::Store => Ok(Some(Value::Name(*sym))),
                    Context::Load => {
                        let name = table.resolve(*sym);
                        let root = self.registry.root(&self.filename, "root");
                        match root.find(name, &self.filename) {
                            Some(entry) => Ok(Some(
                                entry.kind.value.expect("an inserted symbol always carries a value"),
                            )),
                            None => Err(SyntaxError::new(
                                LythErrorKind::VariableReferencedBeforeAssignment,
                                node.origin.clone(),
                            )),
                        }
                    }
                }
            }

            AstKind::Add | AstKind::Sub | AstKind::Mul | AstKind::Div | AstKind::Floor => {
                let left = self.eval_value(node.left(), table)?;
                let right = self.eval_value(node.right(), table)?;
                let value = match node.kind {
                    AstKind::Add => left.add(right),
                    AstKind::Sub => left.sub(right),
                    AstKind::Mul => left.mul(right),
                    AstKind::Div => left.div(right),
                    AstKind::Floor => left
                        .floor_div(right)
                        .map_err(|kind| SyntaxError::new(kind, node.origin.clone()))?,
                    _ => unreachable!(),
                };
                Ok(Some(value))
            }

            AstKind::MutableAssign | AstKind::ImmutableAssign => {
                let name_sym = match self.visit(node.left(), Context::Store, table)? {
                    Some(Value::Name(sym)) => sym,
                    _ => unreachable!("assignment target is always a Name node"),
                };
                let name = table.resolve(name_sym).to_string();
                let value = self.eval_value(node.right(), table)?;
                let scope = self.filename.clone();

                let root = self.registry.root(&self.filename, "root");
                let already_bound = root.find(&name, &scope).is_some();

                if node.kind == AstKind::ImmutableAssign && already_bound {
                    return Err(SyntaxError::new(LythErrorKind::ReassignImmutable, node.origin.clone()));
                }

                let entry = root.insert(&name, &scope);
                entry.kind.value = Some(value);
                if !already_bound {
                    entry.kind.mutability = Some(if node.kind == AstKind::MutableAssign {
                        Mutability::Mutable
                    } else {
                        Mutability::Immutable
                    });
                }
                Ok(None)
            }

            AstKind::Let => {
                for child in node.items() {
                    self.visit(child, Context::Load, table)?;
                }
                Ok(None)
            }

            AstKind::Class | AstKind::Type | AstKind::Doc | AstKind::Noop => Ok(None),
        }
    }

    fn eval_value(&mut self, node: &AstNode, table: &StringTable) -> Result<Value, SyntaxError> {
        Ok(self
            .visit(node, Context::Load, table)?
            .expect("an expression-position node always evaluates to a value"))
    }
}
