//! Syntax tree node definitions.
//!
//! The node set is closed: three expression kinds, three statement kinds and
//! the program root. Nodes live in the session arena and reference their
//! children through arena borrows, so a tree can never outlive its arena and
//! cannot be mutated once the parser has handed it out.

use crate::syntax_kind::Operator;
use glassy_core::text::SourceLocation;

// ============================================================================
// Operators
// ============================================================================

/// Precedence tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperatorPrecedence {
    Additive,
    Multiplicative,
}

impl OperatorPrecedence {
    /// The tier that binds one step tighter, if any.
    pub fn next_higher(self) -> Option<OperatorPrecedence> {
        match self {
            OperatorPrecedence::Additive => Some(OperatorPrecedence::Multiplicative),
            OperatorPrecedence::Multiplicative => None,
        }
    }

    /// The loosest tier; a full expression starts here.
    pub fn lowest() -> OperatorPrecedence {
        OperatorPrecedence::Additive
    }
}

/// The arithmetic operators that can appear in a [`BinaryExpr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Map a scanned operator to a binary operator. `=`, `%` and `^` have no
    /// binary form in the grammar.
    pub fn from_operator(op: Operator) -> Option<BinaryOperator> {
        match op {
            Operator::Plus => Some(BinaryOperator::Add),
            Operator::Minus => Some(BinaryOperator::Subtract),
            Operator::Star => Some(BinaryOperator::Multiply),
            Operator::Slash => Some(BinaryOperator::Divide),
            Operator::Percent | Operator::Caret | Operator::Equals => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub fn precedence(self) -> OperatorPrecedence {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => OperatorPrecedence::Additive,
            BinaryOperator::Multiply | BinaryOperator::Divide => OperatorPrecedence::Multiplicative,
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub location: SourceLocation,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr<'a> {
    pub location: SourceLocation,
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<'a> {
    /// Location of the leftmost token of the whole expression.
    pub location: SourceLocation,
    pub operator: BinaryOperator,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr<'a>),
    Binary(BinaryExpr<'a>),
}

impl<'a> Expression<'a> {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expression::Literal(n) => n.location,
            Expression::Identifier(n) => n.location,
            Expression::Binary(n) => n.location,
        }
    }

    /// Structural equality that ignores source locations.
    pub fn same_shape(&self, other: &Expression<'_>) -> bool {
        match (self, other) {
            (Expression::Literal(a), Expression::Literal(b)) => a.value == b.value,
            (Expression::Identifier(a), Expression::Identifier(b)) => a.name == b.name,
            (Expression::Binary(a), Expression::Binary(b)) => {
                a.operator == b.operator && a.left.same_shape(b.left) && a.right.same_shape(b.right)
            }
            _ => false,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// `exit <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExitStmt<'a> {
    pub location: SourceLocation,
    pub value: &'a Expression<'a>,
}

/// `let <name> = <value>;` introduces a new binding.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarStmt<'a> {
    pub location: SourceLocation,
    pub name: &'a str,
    pub value: &'a Expression<'a>,
}

/// `<name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt<'a> {
    pub location: SourceLocation,
    pub name: &'a str,
    pub value: &'a Expression<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Exit(ExitStmt<'a>),
    Declaration(DeclarStmt<'a>),
    Assignment(AssignStmt<'a>),
}

impl<'a> Statement<'a> {
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Exit(n) => n.location,
            Statement::Declaration(n) => n.location,
            Statement::Assignment(n) => n.location,
        }
    }

    /// The expression every statement carries.
    pub fn value(&self) -> &'a Expression<'a> {
        match self {
            Statement::Exit(n) => n.value,
            Statement::Declaration(n) => n.value,
            Statement::Assignment(n) => n.value,
        }
    }

    /// Structural equality that ignores source locations.
    pub fn same_shape(&self, other: &Statement<'_>) -> bool {
        match (self, other) {
            (Statement::Exit(a), Statement::Exit(b)) => a.value.same_shape(b.value),
            (Statement::Declaration(a), Statement::Declaration(b)) => {
                a.name == b.name && a.value.same_shape(b.value)
            }
            (Statement::Assignment(a), Statement::Assignment(b)) => {
                a.name == b.name && a.value.same_shape(b.value)
            }
            _ => false,
        }
    }
}

// ============================================================================
// Program
// ============================================================================

/// The root of a parsed file. Statements are kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program<'a> {
    pub statements: &'a [Statement<'a>],
}

impl<'a> Program<'a> {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Structural equality that ignores source locations.
    pub fn same_shape(&self, other: &Program<'_>) -> bool {
        self.statements.len() == other.statements.len()
            && self
                .statements
                .iter()
                .zip(other.statements.iter())
                .all(|(a, b)| a.same_shape(b))
    }
}
