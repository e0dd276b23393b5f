//! Tokens produced by the scanner.

use glassy_ast::node::BinaryOperator;
use glassy_ast::syntax_kind::{Keyword, Operator, Separator, TokenKind};
use glassy_core::text::SourceLocation;
use std::fmt;

/// What a token is, together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Identifier(String),
    Keyword(Keyword),
    Separator(Separator),
    Operator(Operator),
    Literal(f64),
}

/// A scanned token. Tokens are created once by the scanner and never changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: TokenValue,
    /// Location of the token's first character.
    pub location: SourceLocation,
}

impl Token {
    pub fn new(value: TokenValue, location: SourceLocation) -> Self {
        Self { value, location }
    }

    pub fn kind(&self) -> TokenKind {
        match self.value {
            TokenValue::Identifier(_) => TokenKind::Identifier,
            TokenValue::Keyword(_) => TokenKind::Keyword,
            TokenValue::Separator(_) => TokenKind::Separator,
            TokenValue::Operator(_) => TokenKind::Operator,
            TokenValue::Literal(_) => TokenKind::Literal,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<f64> {
        match self.value {
            TokenValue::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// The sub-kind of this token, if it is of sub-kind family `T`.
    pub fn sub_kind<T: TokenSubKind>(&self) -> Option<T> {
        T::from_token(self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Identifier(name) => write!(f, "Identifier({})", name),
            TokenValue::Keyword(kw) => write!(f, "Keyword({})", kw.text()),
            TokenValue::Separator(sep) => write!(f, "Separator({})", sep.as_char()),
            TokenValue::Operator(op) => write!(f, "Operator({})", op.as_char()),
            TokenValue::Literal(value) => write!(f, "Literal({})", value),
        }
    }
}

/// A family of enumerated sub-kinds (keywords, separators, operators) that
/// can be read back out of a token.
pub trait TokenSubKind: Copy + PartialEq {
    fn from_token(token: &Token) -> Option<Self>;
}

impl TokenSubKind for Keyword {
    fn from_token(token: &Token) -> Option<Self> {
        match token.value {
            TokenValue::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}

impl TokenSubKind for Separator {
    fn from_token(token: &Token) -> Option<Self> {
        match token.value {
            TokenValue::Separator(sep) => Some(sep),
            _ => None,
        }
    }
}

impl TokenSubKind for Operator {
    fn from_token(token: &Token) -> Option<Self> {
        match token.value {
            TokenValue::Operator(op) => Some(op),
            _ => None,
        }
    }
}

/// Arithmetic operators read straight off an operator token.
impl TokenSubKind for BinaryOperator {
    fn from_token(token: &Token) -> Option<Self> {
        match token.value {
            TokenValue::Operator(op) => BinaryOperator::from_operator(op),
            _ => None,
        }
    }
}
