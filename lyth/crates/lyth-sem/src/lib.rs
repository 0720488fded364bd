//! Semantic analysis stage of the lyth compiler front-end: walks the AST
//! produced by `lyth-par`, evaluates arithmetic, and maintains the
//! scope-aware symbol table.

pub mod analysis;
pub mod symbol;
pub mod value;

pub use analysis::{Analyzer, Context};
pub use symbol::{Mutability, SymbolName, SymbolRootRegistry, SymbolType};
pub use value::Value;
