//! glassy_printer: Syntax tree to text output.
//!
//! Converts a tree back into glassy source text that re-parses to the same
//! tree, and renders an indented outline of the tree for debugging.

use glassy_ast::node::*;
use glassy_ast::visitor::AstVisitor;

/// Options for the printer.
pub struct PrinterOptions {
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline after the last statement.
    pub trailing_newline: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            new_line: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// The printer converts tree nodes to source text.
///
/// Binary expressions print as `<left> <op> <right>`; parentheses are added
/// only where the tree could not be recovered without them.
pub struct Printer {
    output: String,
    options: PrinterOptions,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Print a program, one statement per line.
    pub fn print_program(&mut self, program: &Program<'_>) -> String {
        self.output.clear();
        program.accept(self);
        std::mem::take(&mut self.output)
    }

    pub fn print_statement(&mut self, stmt: &Statement<'_>) -> String {
        self.output.clear();
        stmt.accept(self);
        std::mem::take(&mut self.output)
    }

    pub fn print_expression(&mut self, expr: &Expression<'_>) -> String {
        self.output.clear();
        expr.accept(self);
        std::mem::take(&mut self.output)
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn print_operand<'a>(&mut self, operand: &Expression<'a>, parenthesize: bool) {
        if parenthesize {
            self.write("(");
            self.visit_expression(operand);
            self.write(")");
        } else {
            self.visit_expression(operand);
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AstVisitor<'a> for Printer {
    fn visit_program(&mut self, node: &Program<'a>) {
        for (i, stmt) in node.statements.iter().enumerate() {
            if i > 0 {
                self.write_newline();
            }
            self.visit_statement(stmt);
        }
        if self.options.trailing_newline && !node.is_empty() {
            self.write_newline();
        }
    }

    fn visit_exit_statement(&mut self, node: &ExitStmt<'a>) {
        self.write("exit ");
        self.visit_expression(node.value);
        self.write(";");
    }

    fn visit_declaration_statement(&mut self, node: &DeclarStmt<'a>) {
        self.write("let ");
        self.write(node.name);
        self.write(" = ");
        self.visit_expression(node.value);
        self.write(";");
    }

    fn visit_assignment_statement(&mut self, node: &AssignStmt<'a>) {
        self.write(node.name);
        self.write(" = ");
        self.visit_expression(node.value);
        self.write(";");
    }

    fn visit_literal(&mut self, node: &LiteralExpr) {
        let text = node.value.to_string();
        self.write(&text);
    }

    fn visit_identifier(&mut self, node: &IdentifierExpr<'a>) {
        self.write(node.name);
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpr<'a>) {
        let precedence = node.operator.precedence();
        // Operators are left-associative: an equal-tier operand only needs
        // parentheses on the right.
        let left_parens = binary_precedence(node.left).is_some_and(|p| p < precedence);
        let right_parens = binary_precedence(node.right).is_some_and(|p| p <= precedence);

        self.print_operand(node.left, left_parens);
        self.write(" ");
        self.output.push(node.operator.as_char());
        self.write(" ");
        self.print_operand(node.right, right_parens);
    }
}

fn binary_precedence(expr: &Expression<'_>) -> Option<OperatorPrecedence> {
    match expr {
        Expression::Binary(n) => Some(n.operator.precedence()),
        Expression::Literal(_) | Expression::Identifier(_) => None,
    }
}

/// Print a program as source text.
pub fn print_program(program: &Program<'_>) -> String {
    Printer::new().print_program(program)
}

/// Print a single expression as source text.
pub fn print_expression(expr: &Expression<'_>) -> String {
    Printer::new().print_expression(expr)
}

// ============================================================================
// Tree outline
// ============================================================================

/// Renders an indented outline, one node per line.
struct TreeDumper {
    output: String,
    depth: usize,
}

impl TreeDumper {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl<'a> AstVisitor<'a> for TreeDumper {
    fn visit_program(&mut self, node: &Program<'a>) {
        self.line("Program");
        self.nested(|d| {
            for stmt in node.statements.iter() {
                d.visit_statement(stmt);
            }
        });
    }

    fn visit_exit_statement(&mut self, node: &ExitStmt<'a>) {
        self.line("ExitStmt");
        self.nested(|d| d.visit_expression(node.value));
    }

    fn visit_declaration_statement(&mut self, node: &DeclarStmt<'a>) {
        self.line(&format!("DeclarStmt {}", node.name));
        self.nested(|d| d.visit_expression(node.value));
    }

    fn visit_assignment_statement(&mut self, node: &AssignStmt<'a>) {
        self.line(&format!("AssignStmt {}", node.name));
        self.nested(|d| d.visit_expression(node.value));
    }

    fn visit_literal(&mut self, node: &LiteralExpr) {
        self.line(&format!("LiteralExpr {}", node.value));
    }

    fn visit_identifier(&mut self, node: &IdentifierExpr<'a>) {
        self.line(&format!("IdentifierExpr {}", node.name));
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpr<'a>) {
        self.line(&format!("BinaryExpr {}", node.operator.as_char()));
        self.nested(|d| {
            d.visit_expression(node.left);
            d.visit_expression(node.right);
        });
    }
}

/// Render `program` as an indented outline.
pub fn dump_tree(program: &Program<'_>) -> String {
    let mut dumper = TreeDumper {
        output: String::new(),
        depth: 0,
    };
    program.accept(&mut dumper);
    dumper.output
}
