//! glassy_scanner: Lexer for glassy source text.
//!
//! Turns source text into an ordered, immutable sequence of tokens in one
//! eager pass. The first character that does not begin a token stops the
//! scan with a lex diagnostic.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenSubKind, TokenValue};
