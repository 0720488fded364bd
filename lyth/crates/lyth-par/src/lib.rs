//! Recursive-descent parser for the lyth grammar.
//!
//! The parser pulls tokens from a [`lyth_lex::Lexer`] with a single-slot
//! lookaside (`saved_token`): most productions need to look one token
//! ahead to decide whether to keep descending or return what they have,
//! and a general token stack (as used by a larger grammar) would be
//! overkill here since nothing is ever pushed back more than once before
//! being consumed.

pub mod ast;
mod expr;
mod items;
mod stmt;

pub use ast::{AstKind, AstNode, Lexeme};

use lyth_lex::{Lexer, Token};
use lyth_util::error::LythErrorKind;
use lyth_util::{Result, SyntaxError};

pub struct Parser {
    lexer: Lexer,
    saved_token: Option<Token>,
    current_indent: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer, saved_token: None, current_indent: 0 }
    }

    pub fn append(&mut self, text: &str) {
        self.lexer.append(text);
    }

    /// The interner backing every `Name`/`Doc` symbol this parser's lexer
    /// has produced so far, needed by `lyth-sem` to resolve identifiers.
    pub fn string_table(&self) -> &lyth_util::StringTable {
        self.lexer.string_table()
    }

    /// Pulls the next token, either from the one-slot lookaside or fresh
    /// from the lexer.
    pub(crate) fn advance(&mut self) -> Result<Token> {
        if let Some(tok) = self.saved_token.take() {
            return Ok(tok);
        }
        self.lexer.next_token()
    }

    /// Pushes a token back, to be returned by the next `advance`. Calling
    /// this twice before an intervening `advance` is a parser bug.
    pub(crate) fn push_back(&mut self, token: Token) {
        debug_assert!(self.saved_token.is_none(), "lookaside already occupied");
        self.saved_token = Some(token);
    }

    pub(crate) fn peek(&mut self) -> Result<Token> {
        let tok = self.advance()?;
        self.push_back(tok.clone());
        Ok(tok)
    }

    /// Skips any number of consecutive blank `Eol` tokens (blank lines
    /// carry no meaning at statement boundaries).
    pub(crate) fn skip_blank_lines(&mut self) -> Result<()> {
        loop {
            let tok = self.advance()?;
            if tok.kind != lyth_lex::TokenKind::Eol {
                self.push_back(tok);
                return Ok(());
            }
        }
    }

    pub(crate) fn syntax_error(&self, kind: LythErrorKind, token: &Token) -> SyntaxError {
        SyntaxError::new(kind, token.origin.clone())
    }

    /// Produces the next top-level statement, or `None` once the source is
    /// fully consumed (mirrors the historical generator-based parser: one
    /// `next()` call yields one statement or block).
    pub fn next_statement(&mut self) -> Result<Option<AstNode>> {
        self.skip_blank_lines()?;
        let tok = self.peek()?;
        if tok.kind == lyth_lex::TokenKind::Eof {
            return Ok(None);
        }
        self.statement().map(Some)
    }
}

impl Iterator for Parser {
    type Item = Result<AstNode>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_statement() {
            Ok(Some(node)) => Some(Ok(node)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
