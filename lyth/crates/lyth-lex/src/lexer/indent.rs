//! Leading-whitespace accounting at the start of each logical line.
//!
//! Unlike a dedent-tracking lexer, this one does no bookkeeping across
//! lines at all: every non-blank line that starts with at least one space
//! yields its own `Indent` token carrying `columns / 2` as the level,
//! failing `UnevenIndent` when `columns` is odd. A line with no leading
//! space yields no token. The parser (§4.3's block protocol) is the one
//! that compares a line's level against the block it thinks it's in —
//! the lexer reports raw levels, it never diffs them.

use lyth_util::error::LythErrorKind;
use lyth_util::{Result, SourceOrigin, SyntaxError};

use crate::token::{Lexeme, Token, TokenKind};

use super::core::Lexer;

impl Lexer {
    pub(crate) fn lex_indent(&mut self) -> Result<Option<Token>> {
        let snapshot = self.scanner.snapshot();
        let origin_line = self.scanner.line();

        let mut columns = 0usize;
        loop {
            match self.scanner.peek_char() {
                Some(' ') => {
                    self.scanner.next_char();
                    columns += 1;
                }
                _ => break,
            }
        }

        // A blank line (nothing, or immediately EOL/EOF) carries no
        // indentation meaning; restore the cursor so the blank-line
        // handling in `next_token` sees the characters itself.
        if matches!(self.scanner.peek_char(), None | Some('\n')) {
            self.scanner.restore(snapshot);
            return Ok(None);
        }

        if columns == 0 {
            return Ok(None);
        }

        if columns % 2 != 0 {
            let origin = SourceOrigin::new(
                self.scanner.filename().to_string(),
                origin_line,
                columns,
                self.scanner.current_line(),
            );
            return Err(SyntaxError::new(LythErrorKind::UnevenIndent, origin));
        }

        let level = (columns / 2) as u32;
        let origin = SourceOrigin::new(
            self.scanner.filename().to_string(),
            origin_line,
            0,
            self.scanner.current_line(),
        );
        Ok(Some(Token::new(TokenKind::Indent, Lexeme::Indent(level), origin)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::{Lexeme, TokenKind};

    fn indent_levels(src: &str) -> Vec<u32> {
        let mut lexer = Lexer::new("<test>", src);
        let mut levels = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            if tok.kind == TokenKind::Eof {
                break;
            }
            if let Lexeme::Indent(n) = tok.lexeme {
                levels.push(n);
            }
        }
        levels
    }

    #[test]
    fn every_indented_line_reports_its_own_level() {
        assert_eq!(indent_levels("let x:\n  a <- 1\n    b <- 2\n  c <- 3\n\n"), vec![1, 2, 1]);
    }

    #[test]
    fn top_level_lines_carry_no_indent_token() {
        assert_eq!(indent_levels("a <- 1\nb <- 2\n\n"), Vec::<u32>::new());
    }

    #[test]
    fn odd_leading_spaces_fail_uneven_indent() {
        let mut lexer = Lexer::new("<test>", "let x:\n   a <- 1\n\n");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.kind, lyth_util::error::LythErrorKind::UnevenIndent);
    }

    #[test]
    fn blank_line_carries_no_indent_token() {
        assert_eq!(indent_levels("let x:\n  a <- 1\n\n  b <- 2\n\n"), vec![1, 1]);
    }

    proptest::proptest! {
        /// Any line whose leading-space count is odd fails with
        /// `UnevenIndent`, regardless of depth or surrounding text.
        #[test]
        fn odd_leading_spaces_always_fail(width in 1usize..30) {
            let odd = width * 2 + 1;
            let src = format!("let x:\n{}a <- 1\n\n", " ".repeat(odd));
            let mut lexer = Lexer::new("<test>", src);
            lexer.next_token().unwrap();
            lexer.next_token().unwrap();
            lexer.next_token().unwrap();
            lexer.next_token().unwrap();
            let err = lexer.next_token().unwrap_err();
            proptest::prop_assert_eq!(err.kind, lyth_util::error::LythErrorKind::UnevenIndent);
        }
    }
}
