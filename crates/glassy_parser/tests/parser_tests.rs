//! Parser integration tests.
//!
//! Verifies that the parser builds the right tree shapes from glassy source
//! and stops at the first grammar violation with a located diagnostic.

use glassy_ast::node::*;
use glassy_core::{CompilerArena, SourceLocation};
use glassy_diagnostics::{Diagnostic, DiagnosticKind};
use glassy_parser::Parser;
use glassy_scanner::Scanner;

/// Helper: render an expression as an s-expression, e.g. `(+ 3 (* 4 5))`.
fn sexpr(expr: &Expression<'_>) -> String {
    match expr {
        Expression::Literal(n) => format!("{}", n.value),
        Expression::Identifier(n) => n.name.to_string(),
        Expression::Binary(n) => format!("({} {} {})", n.operator.as_char(), sexpr(n.left), sexpr(n.right)),
    }
}

/// Helper: render a statement as an s-expression.
fn sexpr_statement(stmt: &Statement<'_>) -> String {
    match stmt {
        Statement::Exit(n) => format!("(exit {})", sexpr(n.value)),
        Statement::Declaration(n) => format!("(let {} {})", n.name, sexpr(n.value)),
        Statement::Assignment(n) => format!("(set {} {})", n.name, sexpr(n.value)),
    }
}

/// Helper: parse source text and render every statement.
fn parse(source: &str) -> Vec<String> {
    let arena = CompilerArena::with_capacity(4096);
    let tokens = Scanner::tokenize(source).expect("source should scan");
    let program = Parser::new(&arena, &tokens).parse_program().expect("source should parse");
    program.statements.iter().map(sexpr_statement).collect()
}

/// Helper: parse source text that must fail.
fn parse_err(source: &str) -> Diagnostic {
    let arena = CompilerArena::with_capacity(4096);
    let tokens = Scanner::tokenize(source).expect("source should scan");
    match Parser::new(&arena, &tokens).parse_program() {
        Ok(program) => panic!("expected a parse error, got {} statements", program.len()),
        Err(err) => err,
    }
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_parse_empty_program() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n").is_empty());
}

#[test]
fn test_parse_exit() {
    assert_eq!(parse("exit 1+2;"), vec!["(exit (+ 1 2))"]);
}

#[test]
fn test_parse_declaration() {
    assert_eq!(parse("let y = (1 + 2) * 3;"), vec!["(let y (* (+ 1 2) 3))"]);
}

#[test]
fn test_parse_assignment() {
    assert_eq!(parse("x = 3 + 4 * 5;"), vec!["(set x (+ 3 (* 4 5)))"]);
}

#[test]
fn test_statements_keep_source_order() {
    let source = "let a = 1;\nlet b = a;\na = b * 2;\nexit a;\n";
    assert_eq!(
        parse(source),
        vec!["(let a 1)", "(let b a)", "(set a (* b 2))", "(exit a)"]
    );
}

#[test]
fn test_assignment_to_undeclared_name_is_syntactically_valid() {
    assert_eq!(parse("never_declared = 4;"), vec!["(set never_declared 4)"]);
}

// ============================================================================
// Precedence and associativity
// ============================================================================

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(parse("x = 10 - 3 - 2;"), vec!["(set x (- (- 10 3) 2))"]);
}

#[test]
fn test_division_is_left_associative() {
    assert_eq!(parse("x = 8 / 4 / 2;"), vec!["(set x (/ (/ 8 4) 2))"]);
}

#[test]
fn test_mixed_tiers() {
    assert_eq!(
        parse("x = 1 * 2 + 3 * 4 - 5 / 6;"),
        vec!["(set x (- (+ (* 1 2) (* 3 4)) (/ 5 6)))"]
    );
}

#[test]
fn test_parentheses_reset_precedence() {
    assert_eq!(parse("x = 2 * (3 - (4 - 5));"), vec!["(set x (* 2 (- 3 (- 4 5))))"]);
    assert_eq!(parse("x = ((((7))));"), vec!["(set x 7)"]);
}

#[test]
fn test_decimal_literals_and_identifiers() {
    assert_eq!(parse("let r = 2.5 * radius;"), vec!["(let r (* 2.5 radius))"]);
}

#[test]
fn test_binary_location_is_leftmost_token() {
    let arena = CompilerArena::with_capacity(4096);
    let tokens = Scanner::tokenize("x = a * (b + c);").unwrap();
    let program = Parser::new(&arena, &tokens).parse_program().unwrap();
    let value = program.statements[0].value();
    assert_eq!(value.location(), SourceLocation::new(1, 5));
    match value {
        Expression::Binary(n) => assert_eq!(n.right.location(), SourceLocation::new(1, 10)),
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_terminator_reports_last_token() {
    let err = parse_err("x = 1");
    assert_eq!(err.kind, DiagnosticKind::Parse);
    assert_eq!(err.message, "Expected ';'");
    assert_eq!(err.location, Some(SourceLocation::new(1, 5)));
}

#[test]
fn test_unbalanced_parenthesis_reports_semicolon() {
    let err = parse_err("x = (1 + 2;");
    assert_eq!(err.to_string(), "Expected ')' [Ln 1, Col 11]");
}

#[test]
fn test_unknown_leading_token_expects_identifier() {
    assert_eq!(parse_err("42 = x;").message, "Expected identifier");
    assert_eq!(parse_err("; x = 1;").message, "Expected identifier");
}

#[test]
fn test_let_requires_identifier() {
    let err = parse_err("let 5 = 1;");
    assert_eq!(err.to_string(), "Expected identifier [Ln 1, Col 5]");
}

#[test]
fn test_missing_equals() {
    assert_eq!(parse_err("let a 1;").to_string(), "Expected '=' [Ln 1, Col 7]");
    assert_eq!(parse_err("a + 1;").message, "Expected '='");
}

#[test]
fn test_missing_factor_at_end() {
    let err = parse_err("exit 1 +");
    assert_eq!(err.to_string(), "Expected factor [Ln 1, Col 8]");
}

#[test]
fn test_unexpected_token_in_factor() {
    assert_eq!(parse_err("exit ;").to_string(), "Unexpected token in factor [Ln 1, Col 6]");
    assert_eq!(parse_err("x = 1 % 2;").message, "Expected ';'");
    assert_eq!(parse_err("x = exit;").message, "Unexpected token in factor");
}

#[test]
fn test_first_error_wins() {
    let err = parse_err("x = ;\ny = ;\n");
    assert_eq!(err.location, Some(SourceLocation::new(1, 5)));
}
