//! Class declarations: the `let NAME:` / `let NAME be BASE:` forms.
//!
//! Split out of [`super::stmt`] since a class body is its own indented
//! block of member statements rather than a single expression — the same
//! reason the grammar gives top-level `let:` its own block handling.

use crate::ast::{AstKind, AstNode};
use crate::Parser;
use lyth_util::Result;

impl Parser {
    /// Finishes a `let` that is actually a class declaration: consumes the
    /// trailing end-of-line, the indented member block, and produces the
    /// `Class` node the analyzer accepts but does not evaluate.
    pub(crate) fn classdef(
        &mut self,
        origin: lyth_util::SourceOrigin,
        name_node: AstNode,
        base_node: Option<AstNode>,
    ) -> Result<AstNode> {
        self.expect_statement_end()?;
        let body = self.block()?;
        let mut children = vec![name_node];
        children.extend(base_node);
        children.extend(body);
        Ok(AstNode::seq(AstKind::Class, origin, children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyth_lex::Lexer;

    #[test]
    fn classdef_with_base_collects_type_member() {
        let mut parser = Parser::new(Lexer::new("<test>", "let Point3 be Point:\n  z <- 0\n"));
        let node = parser.next_statement().unwrap().unwrap();
        assert_eq!(node.kind, AstKind::Class);
        assert_eq!(node.items()[1].kind, AstKind::Type);
    }
}
