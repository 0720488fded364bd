//! Source location tracking.
//!
//! [`SourceOrigin`] is the language-facing location type threaded through
//! tokens and AST nodes: a filename, a 0-based line number, a 0-based
//! column, and the full text of the line the location falls on (needed
//! verbatim to render the `^` diagnostic pointer).

use std::fmt;

/// The location a token or AST node came from, and the text of the line it
/// came from, so diagnostics can be rendered without re-reading the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceOrigin {
    pub filename: String,
    pub line: usize,
    pub column: usize,
    pub line_text: String,
}

impl SourceOrigin {
    pub fn new(filename: impl Into<String>, line: usize, column: usize, line_text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
            line_text: line_text.into(),
        }
    }
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}', line {}, column {}", self.filename, self.line, self.column)
    }
}

/// A byte range within a single logical buffer, used where two origins need
/// to be compared or merged (for example, a binary expression spanning its
/// left and right operands).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn point(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}
