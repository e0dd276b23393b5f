//! glassy_parser: Recursive descent parser for glassy.
//!
//! Parses the token sequence produced by the scanner into an arena-allocated
//! syntax tree rooted at a single `Program`.

mod parser;
mod precedence;

pub use parser::{Parser, MAX_RECURSION_DEPTH};
