//! Arithmetic expression parsing.
//!
//! Two precedence levels only — addition/subtraction below multiplication/
//! division/floor-division — so this is a plain left-associative recursive
//! descent rather than a general Pratt table: `addition` delegates to
//! `multiplication`, which delegates to `literal`, each looping on its own
//! operator set and pushing back whatever doesn't match.

use lyth_lex::{SymbolKind, Token, TokenKind};
use lyth_util::error::LythErrorKind;
use lyth_util::Result;

use crate::ast::{AstKind, AstNode, Lexeme};
use crate::Parser;

impl Parser {
    pub fn expression(&mut self) -> Result<AstNode> {
        self.addition()
    }

    fn addition(&mut self) -> Result<AstNode> {
        let mut node = self.multiplication()?;
        loop {
            let tok = self.advance()?;
            let kind = match tok.as_symbol() {
                Some(SymbolKind::Add) => AstKind::Add,
                Some(SymbolKind::Sub) => AstKind::Sub,
                _ => {
                    self.push_back(tok);
                    break;
                }
            };
            let origin = tok.origin.clone();
            let right = self.multiplication()?;
            node = AstNode::binary(kind, origin, node, right);
        }
        Ok(node)
    }

    fn multiplication(&mut self) -> Result<AstNode> {
        let mut node = self.literal()?;
        loop {
            let tok = self.advance()?;
            let kind = match tok.as_symbol() {
                Some(SymbolKind::Mul) => AstKind::Mul,
                Some(SymbolKind::Div) => AstKind::Div,
                Some(SymbolKind::Floor) => AstKind::Floor,
                _ => {
                    self.push_back(tok);
                    break;
                }
            };
            let origin = tok.origin.clone();
            let right = self.literal()?;
            node = AstNode::binary(kind, origin, node, right);
        }
        Ok(node)
    }

    /// A numeral, a name, or a fully parenthesized sub-expression.
    fn literal(&mut self) -> Result<AstNode> {
        let tok = self.advance()?;

        match tok.kind {
            TokenKind::Eof | TokenKind::Eol => {
                Err(self.syntax_error(LythErrorKind::IncompleteLine, &tok))
            }
            TokenKind::Literal(lyth_lex::LiteralKind::Doc) => self.literal(),
            TokenKind::Literal(lyth_lex::LiteralKind::Value) => Ok(AstNode::leaf(
                AstKind::Num,
                Lexeme::Int(tok.int_value().expect("Value token without int payload")),
                tok.origin,
            )),
            TokenKind::Literal(lyth_lex::LiteralKind::Name) => Ok(AstNode::leaf(
                AstKind::Name,
                Lexeme::Name(tok.name().expect("Name token without symbol payload")),
                tok.origin,
            )),
            TokenKind::Symbol(SymbolKind::LParen) => {
                let inner = self.expression()?;
                let close = self.advance()?;
                if close.as_symbol() != Some(SymbolKind::RParen) {
                    return Err(self.syntax_error(LythErrorKind::SyntaxError, &close));
                }
                Ok(inner)
            }
            TokenKind::Symbol(SymbolKind::Add) | TokenKind::Symbol(SymbolKind::Sub) => {
                self.signed_numeral(tok)
            }
            _ => Err(self.syntax_error(LythErrorKind::LiteralExpected, &tok)),
        }
    }

    /// A numeral whose sign the lexer split off as its own token (§4.2): a
    /// bare `Value` must follow immediately, since the grammar has no other
    /// unary-operator production — anything else is `LiteralExpected`.
    fn signed_numeral(&mut self, sign: Token) -> Result<AstNode> {
        let value_tok = self.advance()?;
        if value_tok.kind != TokenKind::Literal(lyth_lex::LiteralKind::Value) {
            return Err(self.syntax_error(LythErrorKind::LiteralExpected, &value_tok));
        }
        let n = value_tok.int_value().expect("Value token without int payload");
        let n = if sign.as_symbol() == Some(SymbolKind::Sub) { -n } else { n };
        Ok(AstNode::leaf(AstKind::Num, Lexeme::Int(n), sign.origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyth_lex::Lexer;

    fn parse_expr(src: &str) -> AstNode {
        let mut parser = Parser::new(Lexer::new("<test>", src));
        parser.expression().expect("parse error")
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let node = parse_expr("1 + 2 * 3\n");
        assert_eq!(node.kind, AstKind::Add);
        assert_eq!(node.right().kind, AstKind::Mul);
    }

    #[test]
    fn subtraction_is_left_associative() {
        let node = parse_expr("5 - 2 - 1\n");
        assert_eq!(node.kind, AstKind::Sub);
        assert_eq!(node.left().kind, AstKind::Sub);
    }

    #[test]
    fn parenthesized_expression_overrides_precedence() {
        let node = parse_expr("(1 + 2) * 3\n");
        assert_eq!(node.kind, AstKind::Mul);
        assert_eq!(node.left().kind, AstKind::Add);
    }

    /// §4.2's recovery rule splits `-3` into `Sub`, `Value(3)` regardless of
    /// the space before it, so `5 -3` is binary subtraction, not `5`
    /// followed by a dangling unary literal.
    #[test]
    fn unspaced_minus_is_binary_subtraction_not_a_signed_literal() {
        let node = parse_expr("5 -3\n");
        assert_eq!(node.kind, AstKind::Sub);
        assert_eq!(node.left().kind, AstKind::Num);
        assert_eq!(node.right().kind, AstKind::Num);
    }

    #[test]
    fn leading_sign_folds_into_a_negative_numeral() {
        let node = parse_expr("-5 + 1\n");
        assert_eq!(node.kind, AstKind::Add);
        assert_eq!(node.left().kind, AstKind::Num);
        match node.left().value() {
            Lexeme::Int(n) => assert_eq!(*n, -5),
            _ => panic!("expected an Int lexeme"),
        }
    }

    #[test]
    fn dangling_sign_not_followed_by_a_value_errors() {
        let mut parser = Parser::new(Lexer::new("<test>", "-x\n"));
        let err = parser.expression().unwrap_err();
        assert_eq!(err.kind, LythErrorKind::LiteralExpected);
    }

    /// A binary node's origin is the operator's column, not the left
    /// operand's — `12 + 3`'s `+` sits at column 3.
    #[test]
    fn binary_node_origin_is_the_operators_column() {
        let node = parse_expr("12 + 3\n");
        assert_eq!(node.origin.column, 3);
    }

    #[test]
    fn incomplete_line_at_eof_errors() {
        let mut parser = Parser::new(Lexer::new("<test>", "1 +\n"));
        let err = parser.expression().unwrap_err();
        assert_eq!(err.kind, LythErrorKind::IncompleteLine);
    }

    /// Walks a `+`/`-`/`*`-only AST back down to its `i64` result, with no
    /// dependency on `lyth-sem` (would cycle the crate graph).
    fn eval(node: &AstNode) -> i64 {
        match node.kind {
            AstKind::Num => match node.value() {
                Lexeme::Int(n) => *n,
                _ => unreachable!("Num node always carries an Int lexeme"),
            },
            AstKind::Add => eval(node.left()) + eval(node.right()),
            AstKind::Sub => eval(node.left()) - eval(node.right()),
            AstKind::Mul => eval(node.left()) * eval(node.right()),
            _ => unreachable!("no other kind appears in a +/-/* expression"),
        }
    }

    /// Reference evaluator over the flat term/op lists, independent of the
    /// parser: collapses `*` groups left to right, then folds the
    /// remaining `+`/`-` left to right.
    fn expected_value(terms: &[i64], ops: &[char]) -> i64 {
        let mut values = vec![terms[0]];
        let mut adds = Vec::new();
        for (i, op) in ops.iter().enumerate() {
            match op {
                '*' => *values.last_mut().unwrap() *= terms[i + 1],
                '+' | '-' => {
                    values.push(terms[i + 1]);
                    adds.push(*op);
                }
                _ => unreachable!(),
            }
        }
        let mut total = values[0];
        for (v, op) in values[1..].iter().zip(adds.iter()) {
            match op {
                '+' => total += v,
                '-' => total -= v,
                _ => unreachable!(),
            }
        }
        total
    }

    proptest::proptest! {
        /// For any `+`/`-`/`*` expression over integer literals (no
        /// names), the parsed AST evaluates to the standard mathematical
        /// result. Division is covered separately by `Value`'s own tests
        /// (`lyth-sem/src/value.rs`), since comparing it here would need a
        /// float-tolerant reference model.
        #[test]
        fn arithmetic_matches_standard_precedence(
            terms in proptest::collection::vec(-50i64..50, 1..6),
            ops in proptest::collection::vec(proptest::sample::select(vec!['+', '-', '*']), 0..5),
        ) {
            let ops = &ops[..ops.len().min(terms.len() - 1)];
            let mut src = terms[0].to_string();
            for (term, op) in terms.iter().skip(1).zip(ops.iter()) {
                src.push(' ');
                src.push(*op);
                src.push(' ');
                src.push_str(&term.to_string());
            }
            src.push('\n');

            let node = parse_expr(&src);
            proptest::prop_assert_eq!(eval(&node), expected_value(&terms[..ops.len() + 1], ops));
        }
    }
}
