//! Diagnostic accumulation for the driver.
//!
//! Each pipeline stage reports at most one [`crate::error::SyntaxError`] per
//! operation via `Result`; [`Handler`] exists at the driver layer, which may
//! want to collect several diagnostics across a whole REPL session (for
//! example, a history of past errors) without aborting the process.
//!
//! ```
//! use lyth_util::diagnostic::Handler;
//! use lyth_util::error::LythErrorKind;
//! use lyth_util::span::SourceOrigin;
//!
//! let mut handler = Handler::new();
//! handler.report(LythErrorKind::SyntaxError, SourceOrigin::new("<stdin>", 1, 0, "???"));
//! assert!(handler.has_errors());
//! ```

mod builder;
mod level;

pub use builder::DiagnosticBuilder;
pub use level::Level;

use std::cell::RefCell;

use crate::error::{LythErrorKind, SyntaxError};
use crate::span::SourceOrigin;

/// One reported diagnostic, with its severity.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub error: SyntaxError,
}

/// Accumulates diagnostics across a session. Interior mutability lets a
/// `&Handler` be shared by several collaborators without a `RefCell` at
/// every call site.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self, kind: LythErrorKind, origin: SourceOrigin) {
        self.diagnostics.borrow_mut().push(Diagnostic {
            level: Level::Error,
            error: SyntaxError::new(kind, origin),
        });
    }

    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporting_marks_handler_as_errored() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.report(
            LythErrorKind::InvalidCharacter,
            SourceOrigin::new("<stdin>", 1, 0, "$"),
        );
        assert!(handler.has_errors());
        assert_eq!(handler.len(), 1);
    }
}
