//! Character-level cursor over a live, appendable source buffer.
//!
//! Unlike a batch compiler's cursor over a borrowed `&str`, the [`Scanner`]
//! owns a growable buffer: the interactive driver feeds it one line at a
//! time (see `lytht`'s REPL loop), and `append` extends the buffer in place
//! so a block statement spanning several input lines keeps a single,
//! continuous line/column count.

/// Walks an owned source buffer one character at a time, tracking the
/// 0-based line number and 0-based column needed to build a
/// [`lyth_util::SourceOrigin`] for every token.
pub struct Scanner {
    filename: String,
    buffer: String,
    position: usize,
    line: usize,
    column: usize,
    line_start: usize,
    /// The second space of a `\t` expansion, held back so the tab advances
    /// `column` by one while still emitting two characters into the
    /// logical line view.
    pending_tab_space: bool,
}

impl Scanner {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            buffer: String::new(),
            position: 0,
            line: 0,
            column: 0,
            line_start: 0,
            pending_tab_space: false,
        }
    }

    pub fn with_source(filename: impl Into<String>, source: impl Into<String>) -> Self {
        let mut scanner = Self::new(filename);
        scanner.append(&source.into());
        scanner
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Extends the live buffer with more source text, e.g. another line
    /// typed at the REPL prompt. Does not reset the cursor position.
    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The full text of the line the cursor currently sits on, with `\r`
    /// stripped and `\t` expanded to two spaces, used verbatim when
    /// rendering a diagnostic's pointed-to line.
    pub fn current_line(&self) -> String {
        let rest = &self.buffer[self.line_start..];
        let raw = match rest.find('\n') {
            Some(idx) => &rest[..idx],
            None => rest,
        };
        expand_line(raw)
    }

    pub fn is_at_end(&self) -> bool {
        !self.pending_tab_space && self.position >= self.buffer.len()
    }

    /// Returns the next character, advancing line/column bookkeeping.
    ///
    /// `'\r'` is silently skipped. `'\t'` expands to two space characters —
    /// both are emitted across two calls to `next_char`, but `column` only
    /// advances by one for the whole tab, matching the language's (slightly
    /// lossy) column accounting rule; see spec's Open Question on tab
    /// columns, preserved here rather than "fixed".
    pub fn next_char(&mut self) -> Option<char> {
        if self.pending_tab_space {
            self.pending_tab_space = false;
            return Some(' ');
        }

        loop {
            let ch = self.buffer[self.position..].chars().next()?;
            self.position += ch.len_utf8();

            match ch {
                '\r' => continue,
                '\n' => {
                    self.line += 1;
                    self.column = 0;
                    self.line_start = self.position;
                    return Some('\n');
                }
                '\t' => {
                    self.column += 1;
                    self.pending_tab_space = true;
                    return Some(' ');
                }
                _ => {
                    self.column += 1;
                    return Some(ch);
                }
            }
        }
    }

    pub fn peek_char(&self) -> Option<char> {
        if self.pending_tab_space {
            return Some(' ');
        }
        let mut rest = self.buffer[self.position..].chars();
        loop {
            match rest.next()? {
                '\r' => continue,
                '\t' => return Some(' '),
                c => return Some(c),
            }
        }
    }

    /// A cheap, copyable snapshot of cursor state for backtracking.
    pub fn snapshot(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
            line_start: self.line_start,
            pending_tab_space: self.pending_tab_space,
        }
    }

    pub fn restore(&mut self, snapshot: ScannerSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
        self.line_start = snapshot.line_start;
        self.pending_tab_space = snapshot.pending_tab_space;
    }
}

fn expand_line(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\r' => {}
            '\t' => out.push_str("  "),
            c => out.push(c),
        }
    }
    out
}

#[derive(Clone, Copy)]
pub struct ScannerSnapshot {
    position: usize,
    line: usize,
    column: usize,
    line_start: usize,
    pending_tab_space: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_line_and_column_across_newlines() {
        let mut scanner = Scanner::with_source("<stdin>", "ab\ncd\n");
        assert_eq!(scanner.next_char(), Some('a'));
        assert_eq!(scanner.line(), 0);
        assert_eq!(scanner.column(), 1);
        assert_eq!(scanner.next_char(), Some('b'));
        assert_eq!(scanner.next_char(), Some('\n'));
        assert_eq!(scanner.line(), 1);
        assert_eq!(scanner.column(), 0);
        assert_eq!(scanner.current_line(), "cd");
    }

    #[test]
    fn append_extends_buffer_for_continuation() {
        let mut scanner = Scanner::with_source("<stdin>", "let x");
        for _ in 0..5 {
            scanner.next_char();
        }
        assert!(scanner.is_at_end());
        scanner.append(" = 1\n");
        assert!(!scanner.is_at_end());
        assert_eq!(scanner.next_char(), Some(' '));
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut scanner = Scanner::with_source("<stdin>", "abc");
        scanner.next_char();
        let snap = scanner.snapshot();
        scanner.next_char();
        scanner.next_char();
        assert!(scanner.is_at_end());
        scanner.restore(snap);
        assert_eq!(scanner.next_char(), Some('b'));
    }

    #[test]
    fn carriage_returns_are_silently_skipped() {
        let mut scanner = Scanner::with_source("<stdin>", "a\r\nb\n");
        assert_eq!(scanner.next_char(), Some('a'));
        assert_eq!(scanner.next_char(), Some('\n'));
        assert_eq!(scanner.next_char(), Some('b'));
    }

    #[test]
    fn tab_expands_to_two_spaces_but_one_column() {
        let mut scanner = Scanner::with_source("<stdin>", "\tx\n");
        assert_eq!(scanner.next_char(), Some(' '));
        assert_eq!(scanner.column(), 1);
        assert_eq!(scanner.next_char(), Some(' '));
        assert_eq!(scanner.column(), 1);
        assert_eq!(scanner.next_char(), Some('x'));
        assert_eq!(scanner.column(), 2);
    }

    #[test]
    fn current_line_expands_tabs_and_strips_carriage_returns() {
        let mut scanner = Scanner::with_source("<stdin>", "a\tb\r\n");
        scanner.next_char();
        assert_eq!(scanner.current_line(), "a  b");
    }
}
