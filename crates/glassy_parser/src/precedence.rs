//! Binary operators grouped by precedence tier.

use glassy_ast::node::{BinaryOperator, OperatorPrecedence};

/// The operators folded at `precedence`. All of them are left-associative.
pub fn binary_operators_at(precedence: OperatorPrecedence) -> &'static [BinaryOperator] {
    match precedence {
        OperatorPrecedence::Additive => &[BinaryOperator::Add, BinaryOperator::Subtract],
        OperatorPrecedence::Multiplicative => &[BinaryOperator::Multiply, BinaryOperator::Divide],
    }
}
