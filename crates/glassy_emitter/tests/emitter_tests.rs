//! Emitter integration tests.

use glassy_core::{CompilerArena, SourceLocation};
use glassy_diagnostics::{Diagnostic, DiagnosticKind};
use glassy_emitter::{generate_assembly, Emitter};
use glassy_parser::Parser;
use glassy_scanner::Scanner;

/// Helper: compile source to assembly without annotations.
fn emit(source: &str) -> Result<String, Diagnostic> {
    let arena = CompilerArena::with_capacity(4096);
    let tokens = Scanner::tokenize(source).unwrap();
    let program = Parser::new(&arena, &tokens).parse_program().unwrap();
    Emitter::new().with_annotations(false).generate_assembly(&program)
}

/// Helper: the instruction lines, trimmed.
fn instructions(asm: &str) -> Vec<&str> {
    asm.lines().map(str::trim).collect()
}

#[test]
fn test_empty_program_exits_zero() {
    let asm = emit("").unwrap();
    assert_eq!(
        instructions(&asm),
        vec!["global _start", "_start:", "mov rax, 60", "mov rdi, 0", "syscall"]
    );
}

#[test]
fn test_exit_literal() {
    let asm = emit("exit 7;").unwrap();
    assert_eq!(
        instructions(&asm),
        vec![
            "global _start",
            "_start:",
            "mov rax, 7",
            "push rax",
            "mov rax, 60",
            "pop rdi",
            "syscall",
            "mov rax, 60",
            "mov rdi, 0",
            "syscall",
        ]
    );
}

#[test]
fn test_binary_operators() {
    let asm = emit("exit (8 - 2) * 3 / 2 + 1;").unwrap();
    let lines = instructions(&asm);
    assert!(lines.contains(&"sub rax, rbx"));
    assert!(lines.contains(&"imul rax, rbx"));
    assert!(lines.contains(&"cqo"));
    assert!(lines.contains(&"idiv rbx"));
    assert!(lines.contains(&"add rax, rbx"));
}

#[test]
fn test_variables_use_stack_slots() {
    let asm = emit("let a = 1;\nlet b = 2;\nexit a;").unwrap();
    // a sits one slot below b.
    assert!(instructions(&asm).contains(&"push QWORD [rsp + 8]"));
}

#[test]
fn test_assignment_stores_into_slot() {
    let asm = emit("let a = 1;\na = 5;\nexit a;").unwrap();
    let lines = instructions(&asm);
    assert!(lines.contains(&"mov QWORD [rsp + 0], rax"));
    assert!(lines.contains(&"push QWORD [rsp + 0]"));
}

#[test]
fn test_decimal_literals_truncate() {
    let asm = emit("exit 2.9;").unwrap();
    assert!(instructions(&asm).contains(&"mov rax, 2"));
}

#[test]
fn test_annotations() {
    let arena = CompilerArena::with_capacity(4096);
    let tokens = Scanner::tokenize("let a = (1+2)*3;").unwrap();
    let program = Parser::new(&arena, &tokens).parse_program().unwrap();
    let asm = generate_assembly(&program).unwrap();
    assert!(asm.contains(";; let a = (1 + 2) * 3;"));
}

#[test]
fn test_undeclared_identifier() {
    let err = emit("let a = 1;\nexit b;").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Emit);
    assert_eq!(err.to_string(), "Undeclared identifier 'b' [Ln 2, Col 6]");
}

#[test]
fn test_assignment_requires_declaration() {
    let err = emit("x = 1;").unwrap_err();
    assert_eq!(err.message, "Undeclared identifier 'x'");
    assert_eq!(err.location, Some(SourceLocation::new(1, 1)));
}

#[test]
fn test_declaration_cannot_see_itself() {
    let err = emit("let a = a + 1;").unwrap_err();
    assert_eq!(err.message, "Undeclared identifier 'a'");
}

#[test]
fn test_redeclaration() {
    let err = emit("let a = 1;\nlet a = 2;").unwrap_err();
    assert_eq!(err.to_string(), "Identifier 'a' is already declared [Ln 2, Col 1]");
}
