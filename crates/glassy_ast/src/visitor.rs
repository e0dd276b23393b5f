//! Visitor trait for traversing the syntax tree.
//!
//! Each node kind gets its own method. The default implementations walk into
//! children, so an implementor overrides only the nodes it cares about and
//! calls back into the `visit_*` methods (or `walk_*`) to keep descending.

use crate::node::*;

/// A visitor that traverses the tree. Dispatch is an exhaustive `match` over
/// the closed node set, so adding a node kind is a compile error in every
/// visitor until it is handled.
pub trait AstVisitor<'a> {
    fn visit_program(&mut self, node: &Program<'a>) {
        for stmt in node.statements.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        match stmt {
            Statement::Exit(n) => self.visit_exit_statement(n),
            Statement::Declaration(n) => self.visit_declaration_statement(n),
            Statement::Assignment(n) => self.visit_assignment_statement(n),
        }
    }

    // -- Statements --

    fn visit_exit_statement(&mut self, node: &ExitStmt<'a>) {
        self.visit_expression(node.value);
    }

    fn visit_declaration_statement(&mut self, node: &DeclarStmt<'a>) {
        self.visit_expression(node.value);
    }

    fn visit_assignment_statement(&mut self, node: &AssignStmt<'a>) {
        self.visit_expression(node.value);
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        match expr {
            Expression::Literal(n) => self.visit_literal(n),
            Expression::Identifier(n) => self.visit_identifier(n),
            Expression::Binary(n) => self.visit_binary_expression(n),
        }
    }

    fn visit_literal(&mut self, _node: &LiteralExpr) {}

    fn visit_identifier(&mut self, _node: &IdentifierExpr<'a>) {}

    fn visit_binary_expression(&mut self, node: &BinaryExpr<'a>) {
        walk_binary_expression(self, node);
    }
}

/// Visit both operands of a binary expression, left first.
pub fn walk_binary_expression<'a, V: AstVisitor<'a> + ?Sized>(visitor: &mut V, node: &BinaryExpr<'a>) {
    visitor.visit_expression(node.left);
    visitor.visit_expression(node.right);
}

impl<'a> Program<'a> {
    /// Hand the program to `visitor`, which forwards to every statement in order.
    pub fn accept<V: AstVisitor<'a> + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_program(self);
    }
}

impl<'a> Statement<'a> {
    pub fn accept<V: AstVisitor<'a> + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_statement(self);
    }
}

impl<'a> Expression<'a> {
    pub fn accept<V: AstVisitor<'a> + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_expression(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glassy_core::text::SourceLocation;
    use glassy_core::CompilerArena;

    #[derive(Default)]
    struct Counter {
        statements: usize,
        literals: usize,
        identifiers: Vec<String>,
        binaries: usize,
    }

    impl<'a> AstVisitor<'a> for Counter {
        fn visit_statement(&mut self, stmt: &Statement<'a>) {
            self.statements += 1;
            match stmt {
                Statement::Exit(n) => self.visit_exit_statement(n),
                Statement::Declaration(n) => self.visit_declaration_statement(n),
                Statement::Assignment(n) => self.visit_assignment_statement(n),
            }
        }

        fn visit_literal(&mut self, _node: &LiteralExpr) {
            self.literals += 1;
        }

        fn visit_identifier(&mut self, node: &IdentifierExpr<'a>) {
            self.identifiers.push(node.name.to_string());
        }

        fn visit_binary_expression(&mut self, node: &BinaryExpr<'a>) {
            self.binaries += 1;
            walk_binary_expression(self, node);
        }
    }

    #[test]
    fn test_visitor_walks_whole_program() {
        let arena = CompilerArena::with_capacity(4096);
        let at = SourceLocation::start();

        // let a = 1 + b;  exit a;
        let one = arena.alloc(Expression::Literal(LiteralExpr { location: at, value: 1.0 }));
        let b = arena.alloc(Expression::Identifier(IdentifierExpr { location: at, name: "b" }));
        let sum = arena.alloc(Expression::Binary(BinaryExpr {
            location: at,
            operator: BinaryOperator::Add,
            left: one,
            right: b,
        }));
        let a = arena.alloc(Expression::Identifier(IdentifierExpr { location: at, name: "a" }));
        let statements = arena.bump().alloc_slice_clone(&[
            Statement::Declaration(DeclarStmt { location: at, name: "a", value: sum }),
            Statement::Exit(ExitStmt { location: at, value: a }),
        ]);
        let program = Program { statements };

        let mut counter = Counter::default();
        program.accept(&mut counter);

        assert_eq!(counter.statements, 2);
        assert_eq!(counter.literals, 1);
        assert_eq!(counter.binaries, 1);
        assert_eq!(counter.identifiers, vec!["b", "a"]);
    }
}
