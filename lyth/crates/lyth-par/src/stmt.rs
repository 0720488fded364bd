//! Statement parsing: plain expressions, assignment, and `let` forms.
//!
//! The `assign` state machine is folded into `assign_or_expr`: parse an
//! expression first, then look at the next token to decide whether it was
//! really the left member of an assignment. `<-` and `->` are not mirror
//! images of each other: the arrow always points from the value to the
//! name that receives it, so `<-` requires a bare name on its *left* (the
//! expression just parsed) while `->` requires a bare name on its *right*
//! (the token read after the arrow) and lets the left side be any
//! expression. [`Parser::assignment_tail`] is the one place that decides
//! this, shared by bare statements and the `let` single-statement form.

use lyth_lex::{KeywordKind, LiteralKind, SymbolKind, Token, TokenKind};
use lyth_util::error::LythErrorKind;
use lyth_util::Result;

use crate::ast::{AstKind, AstNode, Lexeme};
use crate::Parser;

impl Parser {
    pub(crate) fn statement(&mut self) -> Result<AstNode> {
        let tok = self.peek()?;
        match tok.kind {
            TokenKind::Keyword(KeywordKind::Let) => self.let_form(),
            TokenKind::Literal(LiteralKind::Doc) => self.docstring_statement(),
            _ => self.assign_or_expr(),
        }
    }

    /// A docstring at statement position: `"""text"""` followed immediately
    /// by the end of the line reduces to a no-op statement rather than a
    /// `Doc` node — the documentation text has nowhere to attach, so the
    /// analyzer never needs to see it. If something meaningful follows on
    /// the same line instead (the docstring was really the start of a
    /// longer expression token stream), fall through to ordinary statement
    /// parsing with the doc token consumed.
    fn docstring_statement(&mut self) -> Result<AstNode> {
        let tok = self.advance()?;
        let origin = tok.origin.clone();
        let next = self.peek()?;
        if next.kind == TokenKind::Eol {
            self.advance()?;
            return Ok(AstNode::leaf(AstKind::Noop, Lexeme::None, origin));
        }
        if next.kind == TokenKind::Eof {
            return Ok(AstNode::leaf(AstKind::Noop, Lexeme::None, origin));
        }
        self.statement()
    }

    fn assign_or_expr(&mut self) -> Result<AstNode> {
        let left = self.expression()?;
        let tok = self.advance()?;

        match self.assignment_tail(left.clone(), tok)? {
            Some(node) => {
                self.expect_statement_end()?;
                Ok(node)
            }
            None => {
                self.expect_statement_end()?;
                Ok(left)
            }
        }
    }

    /// Given the expression just parsed as a candidate left member, looks
    /// at `tok` to decide whether an assignment follows. Returns `None`
    /// (with `tok` pushed back) if `tok` is neither `<-` nor `->` — a bare
    /// expression statement.
    ///
    /// `<-`: `left` must already be a bare `Name` (else
    /// `LeftMemberIsExpression`); the right-hand side is a full expression.
    /// `->`: `left` may be any expression; the token immediately after the
    /// arrow must be a bare name (else `NameExpected`) — the arrow points
    /// into that name, so the produced `MutableAssign`/`ImmutableAssign`
    /// node always carries `(target, value)` regardless of which side of
    /// the source arrow the name appeared on.
    pub(crate) fn assignment_tail(&mut self, left: AstNode, tok: Token) -> Result<Option<AstNode>> {
        match tok.as_symbol() {
            Some(SymbolKind::MutAssign) => {
                if left.kind != AstKind::Name {
                    return Err(self.syntax_error(LythErrorKind::LeftMemberIsExpression, &tok));
                }
                let origin = tok.origin.clone();
                let rhs = self.expression()?;
                Ok(Some(AstNode::binary(AstKind::MutableAssign, origin, left, rhs)))
            }
            Some(SymbolKind::ImmAssign) => {
                let name_tok = self.advance()?;
                if name_tok.kind != TokenKind::Literal(LiteralKind::Name) {
                    return Err(self.syntax_error(LythErrorKind::NameExpected, &name_tok));
                }
                let name_node = AstNode::leaf(
                    AstKind::Name,
                    Lexeme::Name(name_tok.name().expect("Name token without symbol payload")),
                    name_tok.origin,
                );
                let origin = tok.origin.clone();
                Ok(Some(AstNode::binary(AstKind::ImmutableAssign, origin, name_node, left)))
            }
            _ => {
                self.push_back(tok);
                Ok(None)
            }
        }
    }

    /// Parses `let:` (multi-statement block), `let NAME:` / `let NAME be
    /// BASE:` (class forms), or a single-statement `let` wrapping an
    /// assignment (`let NAME <- EXPR`, `let EXPR -> NAME`, ...).
    ///
    /// The class forms are only recognized when the expression `let`
    /// introduces reduces to a bare `Name` — a `:` or `be` following any
    /// other expression is not a classdef, it is simply not an assignment
    /// either, so it falls through to `LET_ON_EXPRESSION`.
    pub(crate) fn let_form(&mut self) -> Result<AstNode> {
        let let_tok = self.advance()?;

        let peek = self.peek()?;
        if peek.as_symbol() == Some(SymbolKind::Colon) {
            self.advance()?;
            self.expect_statement_end()?;
            let body = self.block()?;
            return Ok(AstNode::seq(AstKind::Let, let_tok.origin, body));
        }

        let left = self.expression()?;
        let next = self.advance()?;

        if next.as_symbol() == Some(SymbolKind::Colon) {
            if left.kind != AstKind::Name {
                return Err(self.syntax_error(LythErrorKind::LetOnExpression, &next));
            }
            return self.classdef(let_tok.origin, left, None);
        }

        if next.as_keyword() == Some(KeywordKind::Be) {
            if left.kind != AstKind::Name {
                return Err(self.syntax_error(LythErrorKind::LetOnExpression, &next));
            }
            let base_tok = self.advance()?;
            if base_tok.kind != TokenKind::Literal(LiteralKind::Name) {
                return Err(self.syntax_error(LythErrorKind::NameExpected, &base_tok));
            }
            let base_node = AstNode::leaf(
                AstKind::Type,
                Lexeme::Name(base_tok.name().expect("Name token without symbol payload")),
                base_tok.origin,
            );
            let colon = self.advance()?;
            if colon.as_symbol() != Some(SymbolKind::Colon) {
                return Err(self.syntax_error(LythErrorKind::SyntaxError, &colon));
            }
            return self.classdef(let_tok.origin, left, Some(base_node));
        }

        if let Some(assign_node) = self.assignment_tail(left, next.clone())? {
            self.expect_statement_end()?;
            return Ok(AstNode::seq(AstKind::Let, let_tok.origin, vec![assign_node]));
        }

        Err(self.syntax_error(LythErrorKind::LetOnExpression, &next))
    }

    /// Consumes tokens up to and including the statement terminator
    /// (`Eol` or `Eof`); anything else left over is a `GarbageCharacters`
    /// error.
    pub(crate) fn expect_statement_end(&mut self) -> Result<()> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Eol => Ok(()),
            TokenKind::Eof => {
                self.push_back(tok);
                Ok(())
            }
            _ => Err(self.syntax_error(LythErrorKind::GarbageCharacters, &tok)),
        }
    }

    /// Parses the body of an indented block: one level deeper than
    /// whatever block the parser currently thinks it is in.
    pub(crate) fn block(&mut self) -> Result<Vec<AstNode>> {
        self.skip_blank_lines()?;
        let indent_tok = self.advance()?;
        if indent_tok.kind != TokenKind::Indent {
            return Err(self.syntax_error(LythErrorKind::IncompleteLine, &indent_tok));
        }
        let level = indent_tok.indent_level().unwrap_or(0) as usize;
        if level != self.current_indent + 1 {
            return Err(self.syntax_error(LythErrorKind::InconsistentIndent, &indent_tok));
        }
        self.current_indent += 1;

        let mut statements = Vec::new();
        loop {
            self.skip_blank_lines()?;
            let tok = self.peek()?;
            if tok.kind == TokenKind::Eof {
                break;
            }
            if tok.kind == TokenKind::Indent {
                // Every indented line carries its own `Indent` token, not just
                // the first and last of a block, so a sibling statement at the
                // same depth shows up here too — consume it and keep parsing
                // the block rather than treating it as a dedent.
                let next = self.advance()?;
                let next_level = next.indent_level().unwrap_or(0) as usize;
                if next_level == self.current_indent {
                    statements.push(self.statement()?);
                    continue;
                }
                if next_level < self.current_indent {
                    self.push_back(next);
                    break;
                }
                return Err(self.syntax_error(LythErrorKind::InconsistentIndent, &next));
            }
            statements.push(self.statement()?);
        }

        self.current_indent -= 1;
        Ok(statements)
    }
}
