//! Shared infrastructure for the lyth compiler front-end: source locations,
//! string interning, the error taxonomy, and diagnostic accumulation.
//!
//! Every other crate in the workspace (`lyth-lex`, `lyth-par`, `lyth-sem`,
//! `lytht`) depends on this crate and nothing depends the other way.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use error::{LythErrorKind, Result, SyntaxError};
pub use span::SourceOrigin;
pub use symbol::{StringTable, Symbol};
