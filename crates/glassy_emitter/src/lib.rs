//! glassy_emitter: x86-64 assembly output.
//!
//! Lowers a parsed program to NASM source for Linux. Every expression is
//! evaluated on the machine stack; every `let` binding owns one 8-byte stack
//! slot for the rest of the program. `exit` becomes the `exit` syscall, and
//! falling off the end of the program exits with status 0.
//!
//! Literals are truncated to 64-bit integers and arithmetic is signed
//! integer arithmetic.

use glassy_ast::node::*;
use glassy_core::text::SourceLocation;
use glassy_diagnostics::{messages, Diagnostic};
use glassy_printer::Printer;
use indexmap::IndexMap;
use std::fmt::Write;

const SYS_EXIT: u32 = 60;
const SLOT_SIZE: usize = 8;

/// A `let` binding and the stack slot it lives in.
#[derive(Debug, Clone, Copy)]
struct Variable {
    /// Number of values on the stack below this one.
    slot: usize,
    declared_at: SourceLocation,
}

/// The emitter produces assembly text from a program.
pub struct Emitter<'a> {
    output: String,
    /// Number of 8-byte values currently pushed.
    stack_size: usize,
    /// Bindings in declaration order.
    variables: IndexMap<&'a str, Variable>,
    /// Whether to annotate each statement with its source text.
    annotate: bool,
    printer: Printer,
}

impl<'a> Emitter<'a> {
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            stack_size: 0,
            variables: IndexMap::new(),
            annotate: true,
            printer: Printer::new(),
        }
    }

    /// Turn statement comments in the output on or off.
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Lower `program` to NASM source.
    pub fn generate_assembly(mut self, program: &Program<'a>) -> Result<String, Diagnostic> {
        self.output.push_str("global _start\n_start:\n");

        for stmt in program.statements.iter() {
            self.emit_statement(stmt)?;
        }

        self.line(&format!("mov rax, {}", SYS_EXIT));
        self.line("mov rdi, 0");
        self.line("syscall");

        tracing::debug!(
            bytes = self.output.len(),
            variables = self.variables.len(),
            "generated assembly"
        );
        Ok(self.output)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn emit_statement(&mut self, stmt: &Statement<'a>) -> Result<(), Diagnostic> {
        if self.annotate {
            let text = self.printer.print_statement(stmt);
            self.line(&format!(";; {}", text));
        }

        match stmt {
            Statement::Exit(n) => {
                self.emit_expression(n.value)?;
                self.line(&format!("mov rax, {}", SYS_EXIT));
                self.pop("rdi");
                self.line("syscall");
            }
            Statement::Declaration(n) => {
                if let Some(existing) = self.variables.get(n.name) {
                    tracing::trace!(name = n.name, first = %existing.declared_at, "duplicate declaration");
                    return Err(Diagnostic::with_location(
                        n.location,
                        &messages::IDENTIFIER_ALREADY_DECLARED,
                        &[n.name],
                    ));
                }
                // The value stays on the stack and becomes the variable's slot.
                let slot = self.stack_size;
                self.emit_expression(n.value)?;
                self.variables.insert(n.name, Variable { slot, declared_at: n.location });
            }
            Statement::Assignment(n) => {
                let variable = self.lookup(n.name, n.location)?;
                self.emit_expression(n.value)?;
                self.pop("rax");
                let offset = self.slot_offset(variable);
                self.line(&format!("mov QWORD [rsp + {}], rax", offset));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Emit code that leaves the value of `expr` on top of the stack.
    fn emit_expression(&mut self, expr: &Expression<'a>) -> Result<(), Diagnostic> {
        match expr {
            Expression::Literal(n) => {
                self.line(&format!("mov rax, {}", n.value as i64));
                self.push("rax");
            }
            Expression::Identifier(n) => {
                let variable = self.lookup(n.name, n.location)?;
                let offset = self.slot_offset(variable);
                self.push(&format!("QWORD [rsp + {}]", offset));
            }
            Expression::Binary(n) => {
                self.emit_expression(n.left)?;
                self.emit_expression(n.right)?;
                self.pop("rbx");
                self.pop("rax");
                match n.operator {
                    BinaryOperator::Add => self.line("add rax, rbx"),
                    BinaryOperator::Subtract => self.line("sub rax, rbx"),
                    BinaryOperator::Multiply => self.line("imul rax, rbx"),
                    BinaryOperator::Divide => {
                        self.line("cqo");
                        self.line("idiv rbx");
                    }
                }
                self.push("rax");
            }
        }
        Ok(())
    }

    fn lookup(&self, name: &str, location: SourceLocation) -> Result<Variable, Diagnostic> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| Diagnostic::with_location(location, &messages::UNDECLARED_IDENTIFIER, &[name]))
    }

    /// Byte offset of `variable` from the current stack pointer.
    fn slot_offset(&self, variable: Variable) -> usize {
        (self.stack_size - variable.slot - 1) * SLOT_SIZE
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn push(&mut self, operand: &str) {
        self.line(&format!("push {}", operand));
        self.stack_size += 1;
    }

    fn pop(&mut self, register: &str) {
        self.line(&format!("pop {}", register));
        self.stack_size -= 1;
    }

    fn line(&mut self, text: &str) {
        // Writing to a String cannot fail.
        let _ = writeln!(self.output, "    {}", text);
    }
}

impl<'a> Default for Emitter<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower `program` to NASM source with statement annotations.
pub fn generate_assembly(program: &Program<'_>) -> Result<String, Diagnostic> {
    Emitter::new().generate_assembly(program)
}
