//! Whole-pipeline integration tests: source text through the lexer and
//! parser into the analyzer, checked against the six concrete scenarios
//! the semantics were specified against.

use lyth_lex::Lexer;
use lyth_par::Parser;
use lyth_sem::{Analyzer, Mutability, SymbolRootRegistry, Value};
use lyth_util::LythErrorKind;

fn run(src: &str) -> (Analyzer, Vec<Option<Value>>) {
    let mut parser = Parser::new(Lexer::new("<test>", src));
    let mut analyzer = Analyzer::new("<test>", SymbolRootRegistry::new());
    let mut results = Vec::new();
    while let Some(node) = parser.next_statement().expect("parse error") {
        let table = parser.string_table();
        results.push(analyzer.analyze(&node, table).expect("analysis error"));
    }
    (analyzer, results)
}

#[test]
fn scenario_1_simple_addition() {
    let (_, results) = run("1 + 2\n");
    assert_eq!(results, vec![Some(Value::Int(3))]);
}

#[test]
fn scenario_2_operator_precedence() {
    let (_, results) = run("1 + 2 * 3 - 1\n");
    assert_eq!(results, vec![Some(Value::Int(6))]);
}

#[test]
fn scenario_3_parenthesized_name_reference() {
    let (_, results) = run("a <- 10\n1 + (a - 3) * 5\n");
    assert_eq!(results, vec![None, Some(Value::Int(36))]);
}

#[test]
fn scenario_4_mutable_then_immutable_assignment() {
    let (mut analyzer, results) = run("a <- 1 + 2\na * 5 -> b\n");
    assert_eq!(results, vec![None, None]);

    let root = analyzer.root();
    let a = root.find("a", "<test>").expect("a is bound");
    assert_eq!(a.kind.value, Some(Value::Int(3)));
    assert_eq!(a.kind.mutability, Some(Mutability::Mutable));

    let b = root.find("b", "<test>").expect("b is bound");
    assert_eq!(b.kind.value, Some(Value::Int(15)));
    assert_eq!(b.kind.mutability, Some(Mutability::Immutable));
}

#[test]
fn scenario_5_reassigning_immutable_name_fails() {
    let mut parser = Parser::new(Lexer::new("<test>", "7 + 4 -> b\n12 -> b\n"));
    let mut analyzer = Analyzer::new("<test>", SymbolRootRegistry::new());

    let first = parser.next_statement().unwrap().expect("first statement parses");
    analyzer.analyze(&first, parser.string_table()).expect("first assignment succeeds");
    {
        let b = analyzer.root().find("b", "<test>").expect("b is bound");
        assert_eq!(b.kind.value, Some(Value::Int(11)));
        assert_eq!(b.kind.mutability, Some(Mutability::Immutable));
    }

    let second = parser.next_statement().unwrap().expect("second statement parses");
    let err = analyzer.analyze(&second, parser.string_table()).unwrap_err();
    assert_eq!(err.kind, LythErrorKind::ReassignImmutable);
    assert_eq!(err.origin.line, 1);
    assert_eq!(err.origin.column, 3);
}

#[test]
fn scenario_6_bare_let_block() {
    let (mut analyzer, results) = run("let:\n  a <- 1 + 2\n  b <- a * 3\n\n");
    assert_eq!(results, vec![None]);

    let root = analyzer.root();
    assert_eq!(root.find("a", "<test>").unwrap().kind.value, Some(Value::Int(3)));
    assert_eq!(root.find("b", "<test>").unwrap().kind.value, Some(Value::Int(9)));
}
