//! glassy_ast: Syntax tree definitions for the glassy compiler.
//!
//! This module defines the token kind tables shared by the scanner and the
//! parser, the closed set of tree nodes, and the visitor used to walk them.

pub mod node;
pub mod syntax_kind;
pub mod visitor;

// Re-export key types
pub use node::*;
pub use syntax_kind::{Keyword, Operator, Separator, TokenKind};
pub use visitor::AstVisitor;
