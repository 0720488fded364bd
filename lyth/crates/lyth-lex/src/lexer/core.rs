//! Main dispatch loop: aggregates characters from the [`crate::scanner::Scanner`]
//! into [`Token`]s one at a time, following the token-construction contract
//! of the grammar (a token grows by one character at a time until a
//! delimiter or a mismatched character is seen).

use std::collections::VecDeque;

use lyth_util::error::{LythErrorKind, SyntaxError};
use lyth_util::span::SourceOrigin;
use lyth_util::{Result, StringTable};

use crate::scanner::Scanner;
use crate::token::{Lexeme, SymbolKind, Token, TokenKind};

/// A token under construction: the raw text seen so far and the location
/// the first character of it came from.
pub(crate) struct Pending {
    pub text: String,
    pub origin: SourceOrigin,
}

/// Converts a source buffer into a stream of [`Token`]s.
///
/// `next_token` pulls exactly the characters it needs from the scanner and
/// no more, so the interactive driver can call `next_token` until it sees
/// [`TokenKind::Eof`] is *not* reached (signaling "need another input
/// line") and then `append` more text to the underlying scanner.
pub struct Lexer {
    pub(crate) scanner: Scanner,
    pub(crate) table: StringTable,
    pub(crate) pending: Option<Pending>,
    pub(crate) queue: VecDeque<Token>,
    pub(crate) at_line_start: bool,
}

impl Lexer {
    pub fn new(filename: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            scanner: Scanner::with_source(filename, source),
            table: StringTable::new(),
            pending: None,
            queue: VecDeque::new(),
            at_line_start: true,
        }
    }

    /// Feeds more source text to the underlying scanner, e.g. a
    /// continuation line typed at the REPL prompt.
    pub fn append(&mut self, text: &str) {
        self.scanner.append(text);
    }

    pub fn filename(&self) -> &str {
        self.scanner.filename()
    }

    /// The string table backing every interned `Name`/`Doc` lexeme this
    /// lexer has produced, needed by the analyzer to resolve a token's
    /// `Symbol` back to text when it orders or looks up a variable in the
    /// symbol table.
    pub fn string_table(&self) -> &StringTable {
        &self.table
    }

    fn origin_at(&self, start_line: usize, start_column: usize) -> SourceOrigin {
        SourceOrigin::new(
            self.scanner.filename().to_string(),
            start_line,
            start_column,
            self.scanner.current_line(),
        )
    }

    fn error(&self, kind: LythErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.origin_at(self.scanner.line(), self.scanner.column()))
    }

    /// Returns the next token, or an `Eof` token once the buffered input is
    /// fully consumed. Never blocks: running out of characters mid-token
    /// (e.g. a dangling operand) is a caller concern, surfaced once `Eof` is
    /// produced with a pending, unfinished token still buffered (checked via
    /// [`Lexer::has_pending`]).
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(tok) = self.queue.pop_front() {
            return Ok(tok);
        }

        loop {
            if self.at_line_start {
                self.at_line_start = false;
                if let Some(tok) = self.lex_indent()? {
                    return Ok(tok);
                }
            }

            match self.scanner.peek_char() {
                None => return self.finish_at_eof(),
                Some('\n') => {
                    self.scanner.next_char();
                    self.at_line_start = true;
                    if let Some(tok) = self.finalize_pending()? {
                        self.queue.push_back(Token::new(
                            TokenKind::Eol,
                            Lexeme::None,
                            self.origin_at(self.scanner.line(), self.scanner.column()),
                        ));
                        return Ok(tok);
                    }
                    return Ok(Token::new(
                        TokenKind::Eol,
                        Lexeme::None,
                        self.origin_at(self.scanner.line(), self.scanner.column()),
                    ));
                }
                Some(c) if c.is_whitespace() => {
                    self.scanner.next_char();
                    if let Some(tok) = self.finalize_pending()? {
                        return Ok(tok);
                    }
                }
                Some(c) => {
                    self.scanner.next_char();
                    if let Some(tok) = self.consume_char(c)? {
                        return Ok(tok);
                    }
                }
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reaching end-of-input with a token still being aggregated means the
    /// source never closed its last line with `'\n'` — the script-file
    /// convention of §6 requires a trailing blank line, so this is
    /// `MissingEmptyLine`, not a clean `Eof`. A well-formed single `'\n'`
    /// already drained `pending` via the EOL branch of `next_token`, so
    /// this only fires on a genuinely unterminated tail.
    fn finish_at_eof(&mut self) -> Result<Token> {
        if let Some(pending) = self.pending.take() {
            return Err(SyntaxError::new(LythErrorKind::MissingEmptyLine, pending.origin));
        }
        Ok(Token::new(
            TokenKind::Eof,
            Lexeme::None,
            self.origin_at(self.scanner.line(), self.scanner.column()),
        ))
    }

    /// Turns the pending aggregation buffer into a finished token, or
    /// returns `None` if nothing was being aggregated.
    pub(crate) fn finalize_pending(&mut self) -> Result<Option<Token>> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };
        self.finalize(pending).map(Some)
    }

    pub(crate) fn finalize(&mut self, pending: Pending) -> Result<Token> {
        if let Ok(value) = pending.text.parse::<i64>() {
            return Ok(Token::new(
                TokenKind::Literal(crate::token::LiteralKind::Value),
                Lexeme::Int(value),
                pending.origin,
            ));
        }
        if let Some(sym) = SymbolKind::from_lexeme(&pending.text) {
            return Ok(Token::new(TokenKind::Symbol(sym), Lexeme::Symbol(sym), pending.origin));
        }
        if let Some(kw) = crate::token::KeywordKind::from_text(&pending.text) {
            return Ok(Token::new(TokenKind::Keyword(kw), Lexeme::Keyword(kw), pending.origin));
        }
        if crate::lexer::identifier::is_identifier(&pending.text) {
            let sym = self.table.intern(&pending.text);
            return Ok(Token::new(
                TokenKind::Literal(crate::token::LiteralKind::Name),
                Lexeme::Text(sym),
                pending.origin,
            ));
        }
        Err(SyntaxError::new(LythErrorKind::InvalidCharacter, pending.origin))
    }

    /// Consumes one already-read character, either starting a new pending
    /// token, extending the current one, or closing the current one and
    /// starting a fresh one, following the aggregation rules.
    fn consume_char(&mut self, c: char) -> Result<Option<Token>> {
        if c == '"' {
            let finished = self.finalize_pending()?;
            let doc = self.lex_docstring()?;
            if let Some(tok) = finished {
                self.queue.push_back(doc);
                return Ok(Some(tok));
            }
            return Ok(Some(doc));
        }

        let start_line = self.scanner.line();
        let start_column = self.scanner.column() - 1;

        let Some(pending) = self.pending.take() else {
            self.pending = Some(Pending {
                text: c.to_string(),
                origin: self.origin_at(start_line, start_column),
            });
            return Ok(None);
        };

        match self.try_extend(&pending.text, c)? {
            ExtendResult::Extended(new_text) => {
                self.pending = Some(Pending { text: new_text, origin: pending.origin });
                Ok(None)
            }
            ExtendResult::StartNew => {
                let finished = self.finalize(pending)?;
                self.pending = Some(Pending {
                    text: c.to_string(),
                    origin: self.origin_at(start_line, start_column),
                });
                Ok(Some(finished))
            }
        }
    }

    /// Implements the token-aggregation contract: given the text aggregated
    /// so far and a newly read character, decide whether it extends the
    /// current token or forces the current one to close.
    ///
    /// Order matters here: the `)`/`+`/`-`/`(` recoveries must be checked
    /// *before* the general missing-space failures below them, since they
    /// recognize a character the general rules would otherwise reject (`5)`,
    /// `5 -3`, and `(5` are all explicitly permitted by §4.2's recovery
    /// rules, each yielding the current token and starting a fresh one).
    fn try_extend(&self, current: &str, next: char) -> Result<ExtendResult> {
        let combined = format!("{current}{next}");

        if SymbolKind::from_lexeme(&combined).is_some() {
            return Ok(ExtendResult::Extended(combined));
        }

        let current_is_value = super::number::is_numeral(current);
        let current_is_symbol = SymbolKind::from_lexeme(current).is_some();

        if next.is_ascii_digit() && current_is_value {
            return Ok(ExtendResult::Extended(combined));
        }

        if current_is_identifier_prefix(current) && is_identifier_continue(next) {
            return Ok(ExtendResult::Extended(combined));
        }

        // Recovery: a ')' always closes whatever token came before it,
        // regardless of that token's kind, so `5)` and `x)` lex cleanly.
        if next == ')' {
            return Ok(ExtendResult::StartNew);
        }

        // Recovery: '+'/'-'/'(' directly followed by a digit just closes the
        // current token and starts the numeral fresh — yield the current
        // token and start a new one from that character, same as ')'. The
        // parser's own numeral production (`literal`) is what re-attaches a
        // leading sign to the digit run that follows; the lexer never
        // aggregates a sign into a `Value` lexeme.
        if next.is_ascii_digit() && (current == "+" || current == "-" || current == "(") {
            return Ok(ExtendResult::StartNew);
        }

        let next_is_symbol_start = "+-*/<>:()=.!".contains(next);
        if next_is_symbol_start && current_is_value {
            return Err(self.error(LythErrorKind::MissingSpaceBeforeOperator));
        }

        if next.is_ascii_digit() && current_is_symbol {
            return Err(self.error(LythErrorKind::MissingSpaceAfterOperator));
        }

        Ok(ExtendResult::StartNew)
    }
}

fn current_is_identifier_prefix(text: &str) -> bool {
    text.chars().next().map(|c| c.is_ascii_alphabetic() || c == '_').unwrap_or(false)
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

enum ExtendResult {
    Extended(String),
    StartNew,
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(tok) if tok.kind == TokenKind::Eof => None,
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind::*;

    fn kinds(src: &str) -> Vec<crate::token::TokenKind> {
        let mut lexer = Lexer::new("<test>", src);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().expect("lex error");
            let done = tok.kind == Eof;
            out.push(tok.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn lexes_simple_addition() {
        let ks = kinds("1 + 2\n");
        assert!(ks.iter().any(|k| matches!(k, Literal(_))));
        assert!(ks.iter().any(|k| matches!(k, Symbol(SymbolKind::Add))));
    }

    #[test]
    fn minus_before_digit_splits_into_two_tokens() {
        let mut lexer = Lexer::new("<test>", "-5\n");
        let first = lexer.next_token().unwrap();
        assert_eq!(first.kind, Symbol(SymbolKind::Sub));
        let second = lexer.next_token().unwrap();
        assert_eq!(second.int_value(), Some(5));
    }

    #[test]
    fn missing_space_before_operator_errors() {
        let mut lexer = Lexer::new("<test>", "5+\n");
        let err = loop {
            match lexer.next_token() {
                Ok(tok) if tok.kind == Eof => panic!("expected error"),
                Ok(_) => continue,
                Err(e) => break e,
            }
        };
        assert_eq!(err.kind, LythErrorKind::MissingSpaceBeforeOperator);
    }

    #[test]
    fn multi_digit_literal_after_minus_still_lexes_whole() {
        let mut lexer = Lexer::new("<test>", "-56\n");
        let first = lexer.next_token().unwrap();
        assert_eq!(first.kind, Symbol(SymbolKind::Sub));
        let second = lexer.next_token().unwrap();
        assert_eq!(second.int_value(), Some(56));
        let third = lexer.next_token().unwrap();
        assert_eq!(third.kind, Eol);
    }

    /// `5 -3` lexes to `[VALUE 5, SUB, VALUE 3]`, never `GarbageCharacters`
    /// — the `-` recovery splits rather than aggregating a signed literal.
    #[test]
    fn five_space_minus_three_splits_cleanly() {
        let mut lexer = Lexer::new("<test>", "5 -3\n");
        assert_eq!(lexer.next_token().unwrap().int_value(), Some(5));
        assert_eq!(lexer.next_token().unwrap().kind, Symbol(SymbolKind::Sub));
        assert_eq!(lexer.next_token().unwrap().int_value(), Some(3));
        assert_eq!(lexer.next_token().unwrap().kind, Eol);
    }

    #[test]
    fn close_paren_recovers_after_any_token() {
        let ks = kinds("(x)\n");
        assert!(ks.iter().any(|k| matches!(k, Symbol(SymbolKind::RParen))));
    }

    #[test]
    fn digit_after_open_paren_recovers() {
        let mut lexer = Lexer::new("<test>", "(5)\n");
        let first = lexer.next_token().unwrap();
        assert_eq!(first.kind, Symbol(SymbolKind::LParen));
        let second = lexer.next_token().unwrap();
        assert_eq!(second.int_value(), Some(5));
    }

    #[test]
    fn missing_trailing_newline_fails() {
        let mut lexer = Lexer::new("<test>", "1 + 2");
        let err = loop {
            match lexer.next_token() {
                Ok(tok) if tok.kind == Eof => panic!("expected error"),
                Ok(_) => continue,
                Err(e) => break e,
            }
        };
        assert_eq!(err.kind, LythErrorKind::MissingEmptyLine);
    }

    proptest::proptest! {
        /// A well-formed single-line input ends with exactly one `Eol`
        /// immediately followed by exactly one `Eof`.
        #[test]
        fn token_stream_always_ends_with_one_eol_then_eof(
            terms in proptest::collection::vec(0i64..1000, 1..6),
            ops in proptest::collection::vec(proptest::sample::select(vec!['+', '-', '*', '/']), 0..5),
        ) {
            let mut src = terms[0].to_string();
            for (term, op) in terms.iter().skip(1).zip(ops.iter()) {
                src.push(' ');
                src.push(*op);
                src.push(' ');
                src.push_str(&term.to_string());
            }
            src.push('\n');

            let ks = kinds(&src);
            let eol_count = ks.iter().filter(|k| **k == Eol).count();
            let eof_count = ks.iter().filter(|k| **k == Eof).count();
            proptest::prop_assert_eq!(eol_count, 1);
            proptest::prop_assert_eq!(eof_count, 1);
            proptest::prop_assert_eq!(ks[ks.len() - 2], Eol);
            proptest::prop_assert_eq!(ks[ks.len() - 1], Eof);
        }

        /// An integer literal `0..=10^9` lexes to a `Value` token that
        /// carries it back out unchanged.
        #[test]
        fn integer_literal_round_trips(n in 0i64..=1_000_000_000) {
            let mut lexer = Lexer::new("<test>", format!("{n}\n"));
            let tok = lexer.next_token().unwrap();
            proptest::prop_assert_eq!(tok.int_value(), Some(n));
        }

        /// Any character outside the recognized set fails lexing with
        /// `InvalidCharacter` rather than being silently dropped.
        #[test]
        fn unrecognized_character_is_always_rejected(
            c in proptest::sample::select(vec!['@', '#', '$', '%', '^', '&', '~', '`', ';', ',', '[', ']', '{', '}', '|', '?']),
        ) {
            let mut lexer = Lexer::new("<test>", format!("{c} \n"));
            let err = loop {
                match lexer.next_token() {
                    Ok(tok) if tok.kind == Eof => panic!("expected an InvalidCharacter error"),
                    Ok(_) => continue,
                    Err(e) => break e,
                }
            };
            proptest::prop_assert_eq!(err.kind, LythErrorKind::InvalidCharacter);
        }
    }
}
