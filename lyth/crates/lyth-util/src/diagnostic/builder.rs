//! Fluent construction of a [`Diagnostic`] before it is emitted to a
//! [`super::Handler`].

use super::{Diagnostic, Level};
use crate::error::{LythErrorKind, SyntaxError};
use crate::span::SourceOrigin;

pub struct DiagnosticBuilder {
    level: Level,
    kind: LythErrorKind,
    origin: Option<SourceOrigin>,
}

impl DiagnosticBuilder {
    pub fn error(kind: LythErrorKind) -> Self {
        Self {
            level: Level::Error,
            kind,
            origin: None,
        }
    }

    pub fn warning(kind: LythErrorKind) -> Self {
        Self {
            level: Level::Warning,
            kind,
            origin: None,
        }
    }

    pub fn origin(mut self, origin: SourceOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Finalizes the diagnostic. Panics if no origin was set; a diagnostic
    /// without a location cannot be rendered per spec §6.
    pub fn build(self) -> Diagnostic {
        let origin = self.origin.expect("DiagnosticBuilder used without an origin");
        Diagnostic {
            level: self.level,
            error: SyntaxError::new(self.kind, origin),
        }
    }

    pub fn emit(self, handler: &super::Handler) {
        handler.emit(self.build());
    }
}
