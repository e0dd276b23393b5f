//! The glassy scanner.
//!
//! Walks the source one character at a time, tracking a 1-based line and
//! column, and classifies each lexeme through fixed lookup tables.

use crate::token::{Token, TokenValue};
use glassy_ast::syntax_kind::{Keyword, Operator, Separator};
use glassy_core::text::SourceLocation;
use glassy_diagnostics::{messages, Diagnostic};

/// The scanner converts glassy source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Index of the next character to read.
    pos: usize,
    /// Line of the next character.
    line: u32,
    /// Column of the next character.
    column: u32,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scan `source` completely. Identical input always yields an identical
    /// token sequence, locations included.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, Diagnostic> {
        Scanner::new(source).scan_all()
    }

    /// Scan every remaining token.
    pub fn scan_all(mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tracing::trace!(%token, line = token.location.line, column = token.location.column, "scanned token");
            tokens.push(token);
        }
        tracing::debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Scan the next token, or return `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.skip_whitespace();

        let ch = match self.current_char() {
            Some(ch) => ch,
            None => return Ok(None),
        };
        let start = self.location();

        let value = if is_identifier_start(ch) {
            self.scan_identifier()
        } else if ch.is_ascii_digit() {
            self.scan_number(start)?
        } else if let Some(sep) = Separator::from_char(ch) {
            self.advance();
            TokenValue::Separator(sep)
        } else if let Some(op) = Operator::from_char(ch) {
            self.advance();
            TokenValue::Operator(op)
        } else {
            let text = ch.to_string();
            return Err(Diagnostic::with_location(start, &messages::INVALID_CHARACTER, &[&text]));
        };

        Ok(Some(Token::new(value, start)))
    }

    // ========================================================================
    // Character handling
    // ========================================================================

    /// The location of the next character.
    #[inline]
    fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Consume one character, keeping line and column in step.
    fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
                return;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_identifier(&mut self) -> TokenValue {
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if !is_identifier_part(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        match Keyword::from_text(&text) {
            Some(kw) => TokenValue::Keyword(kw),
            None => TokenValue::Identifier(text),
        }
    }

    /// Digits with at most one decimal point. Values too large for an `f64`
    /// are rejected rather than becoming infinite.
    fn scan_number(&mut self, start: SourceLocation) -> Result<TokenValue, Diagnostic> {
        let mut text = String::new();
        let mut seen_dot = false;
        while let Some(ch) = self.current_char() {
            if ch == '.' && !seen_dot {
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.advance();
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(TokenValue::Literal(value)),
            _ => Err(Diagnostic::with_location(start, &messages::INVALID_NUMERIC_LITERAL, &[&text])),
        }
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
