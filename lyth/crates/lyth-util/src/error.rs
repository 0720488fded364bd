//! The error taxonomy shared by every stage of the pipeline.
//!
//! Each compiler stage raises at most one [`SyntaxError`] per operation and
//! stops; there is no multi-diagnostic batching (see `Handler` in
//! [`crate::diagnostic`] for the accumulation API used by the driver).

use std::fmt;

use crate::span::SourceOrigin;

/// The full set of error conditions a lyth source file can trigger.
///
/// Mirrors the historical `LythError` enumeration one to one, with
/// additional members the original prototype never needed once
/// indentation, keywords, and block forms were introduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LythErrorKind {
    InvalidCharacter,
    MissingSpaceBeforeOperator,
    MissingSpaceAfterOperator,
    MissingEmptyLine,
    UnevenIndent,
    IncompleteLine,
    LiteralExpected,
    NameExpected,
    GarbageCharacters,
    LeftMemberIsExpression,
    LetOnExpression,
    InconsistentIndent,
    ReassignImmutable,
    VariableReferencedBeforeAssignment,
    SyntaxError,
}

impl LythErrorKind {
    /// The human readable message, matching the historical `LythError` enum
    /// values verbatim for the members that predate this crate.
    pub fn message(self) -> &'static str {
        match self {
            LythErrorKind::InvalidCharacter => "Invalid character",
            LythErrorKind::MissingSpaceBeforeOperator => "Missing space before operator",
            LythErrorKind::MissingSpaceAfterOperator => "Missing space after operator",
            LythErrorKind::MissingEmptyLine => "Missing empty line right before end of file",
            LythErrorKind::UnevenIndent => "Uneven indentation",
            LythErrorKind::IncompleteLine => "Incomplete line",
            LythErrorKind::LiteralExpected => "Literal expected",
            LythErrorKind::NameExpected => "Name expected",
            LythErrorKind::GarbageCharacters => "Garbage characters after expression",
            LythErrorKind::LeftMemberIsExpression => "Left member is an expression, not a name",
            LythErrorKind::LetOnExpression => "'let' used on an expression",
            LythErrorKind::InconsistentIndent => "Inconsistent indentation",
            LythErrorKind::ReassignImmutable => "Reassignment of an immutable variable",
            LythErrorKind::VariableReferencedBeforeAssignment => {
                "Variable referenced before assignment"
            }
            LythErrorKind::SyntaxError => "Invalid syntax",
        }
    }
}

impl fmt::Display for LythErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single diagnosed error, tied to the exact source location it occurred
/// at, rendered in the driver-facing format:
///
/// ```text
/// <MESSAGE> at '<FILENAME>', line <LINENO>:
/// \t<LINE_TEXT>
/// \t<SPACES>^
/// ```
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", render(.kind, .origin))]
pub struct SyntaxError {
    pub kind: LythErrorKind,
    pub origin: SourceOrigin,
}

impl SyntaxError {
    pub fn new(kind: LythErrorKind, origin: SourceOrigin) -> Self {
        Self { kind, origin }
    }
}

fn render(kind: &LythErrorKind, origin: &SourceOrigin) -> String {
    format!(
        "{} at '{}', line {}:\n\t{}\n\t{}^",
        kind.message(),
        origin.filename,
        origin.line,
        origin.line_text,
        " ".repeat(origin.column)
    )
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
