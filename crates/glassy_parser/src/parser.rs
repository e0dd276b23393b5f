//! The glassy parser implementation.
//!
//! A recursive descent parser over a fully scanned token sequence, with a
//! single forward cursor and one token of lookahead. Grammar, loosest first:
//!
//! ```text
//! program    -> statement*
//! statement  -> "exit" expression ";"
//!             | "let" IDENTIFIER "=" expression ";"
//!             | IDENTIFIER "=" expression ";"
//! expression -> term (("+" | "-") term)*
//! term       -> factor (("*" | "/") factor)*
//! factor     -> LITERAL | IDENTIFIER | "(" expression ")"
//! ```
//!
//! The first grammar violation ends the parse with a diagnostic; there is no
//! recovery and no partial tree.

use bumpalo::collections::Vec as BumpVec;
use glassy_ast::node::*;
use glassy_ast::syntax_kind::{Keyword, Operator, Separator, TokenKind};
use glassy_core::text::SourceLocation;
use glassy_core::CompilerArena;
use glassy_diagnostics::{messages, Diagnostic, DiagnosticMessage};
use glassy_scanner::{Token, TokenSubKind, TokenValue};

use crate::precedence::binary_operators_at;

/// Maximum parenthesis nesting depth to prevent stack overflow on deeply nested input.
pub const MAX_RECURSION_DEPTH: u32 = 256;

type ParseResult<T> = Result<T, Diagnostic>;

/// The parser produces a `Program` from a token sequence. Every node is
/// allocated in `arena`, so the tree lives exactly as long as the arena.
pub struct Parser<'a, 't> {
    arena: &'a CompilerArena,
    tokens: &'t [Token],
    index: usize,
    /// Tracks parenthesis nesting to prevent stack overflow on deeply nested input.
    recursion_depth: u32,
}

impl<'a, 't> Parser<'a, 't> {
    pub fn new(arena: &'a CompilerArena, tokens: &'t [Token]) -> Self {
        Self {
            arena,
            tokens,
            index: 0,
            recursion_depth: 0,
        }
    }

    /// Parse the whole token sequence into one `Program`.
    pub fn parse_program(mut self) -> ParseResult<Program<'a>> {
        let mut statements = BumpVec::new_in(self.arena.bump());

        while self.peek(0).is_some() {
            statements.push(self.parse_statement()?);
        }

        let program = Program {
            statements: statements.into_bump_slice(),
        };
        tracing::debug!(
            statements = program.len(),
            arena_bytes = self.arena.allocated_bytes(),
            "parsed program"
        );
        Ok(program)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// The token `offset` places past the cursor, or `None` past the end.
    #[inline]
    fn peek(&self, offset: usize) -> Option<&'t Token> {
        self.tokens.get(self.index + offset)
    }

    /// Return the current token and advance. Running off the end is a bug in
    /// the caller, reported as an unexpected end of file.
    fn consume(&mut self) -> ParseResult<&'t Token> {
        match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                Ok(token)
            }
            None => Err(self.error_at_end(&messages::UNEXPECTED_END_OF_FILE)),
        }
    }

    /// Consume the current token if its sub-kind is one of `candidates`.
    /// On a miss the cursor does not move.
    fn match_any<T: TokenSubKind>(&mut self, candidates: &[T]) -> Option<T> {
        let found = self.peek(0)?.sub_kind::<T>()?;
        if candidates.contains(&found) {
            self.index += 1;
            Some(found)
        } else {
            None
        }
    }

    /// Consume the current token if it is of `kind`, or fail with `message`.
    fn expect(&mut self, kind: TokenKind, message: &DiagnosticMessage) -> ParseResult<&'t Token> {
        match self.peek(0) {
            Some(token) if token.kind() == kind => self.consume(),
            Some(token) => Err(Diagnostic::with_location(token.location, message, &[])),
            None => Err(self.error_at_end(message)),
        }
    }

    /// Consume the current token if it is exactly `expected`, or fail with `message`.
    fn expect_sub<T: TokenSubKind>(&mut self, expected: T, message: &DiagnosticMessage) -> ParseResult<&'t Token> {
        match self.peek(0) {
            Some(token) if token.sub_kind::<T>() == Some(expected) => self.consume(),
            Some(token) => Err(Diagnostic::with_location(token.location, message, &[])),
            None => Err(self.error_at_end(message)),
        }
    }

    /// A diagnostic for running out of tokens, anchored at the last token seen.
    fn error_at_end(&self, message: &DiagnosticMessage) -> Diagnostic {
        match self.tokens.last() {
            Some(last) => Diagnostic::with_location(last.location, message, &[]),
            None => Diagnostic::new(message, &[]),
        }
    }

    /// Copy an identifier token's text into the arena.
    fn identifier_text(&self, token: &Token) -> &'a str {
        self.arena.alloc_str(token.identifier().unwrap_or_default())
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_statement(&mut self) -> ParseResult<Statement<'a>> {
        let location = self.current_location();

        if self.match_any(&[Keyword::Exit]).is_some() {
            let value = self.parse_expression()?;
            self.expect_sub(Separator::Semicolon, &messages::EXPECTED_SEMICOLON)?;
            return Ok(Statement::Exit(ExitStmt { location, value }));
        }

        if self.match_any(&[Keyword::Let]).is_some() {
            let name_token = self.expect(TokenKind::Identifier, &messages::EXPECTED_IDENTIFIER)?;
            let name = self.identifier_text(name_token);
            self.expect_sub(Operator::Equals, &messages::EXPECTED_EQUALS)?;
            let value = self.parse_expression()?;
            self.expect_sub(Separator::Semicolon, &messages::EXPECTED_SEMICOLON)?;
            return Ok(Statement::Declaration(DeclarStmt { location, name, value }));
        }

        // Anything else must be a bare assignment, so an unrecognized leading
        // token surfaces as "Expected identifier".
        let name_token = self.expect(TokenKind::Identifier, &messages::EXPECTED_IDENTIFIER)?;
        let name = self.identifier_text(name_token);
        self.expect_sub(Operator::Equals, &messages::EXPECTED_EQUALS)?;
        let value = self.parse_expression()?;
        self.expect_sub(Separator::Semicolon, &messages::EXPECTED_SEMICOLON)?;
        Ok(Statement::Assignment(AssignStmt { location, name, value }))
    }

    fn current_location(&self) -> SourceLocation {
        self.peek(0)
            .or_else(|| self.tokens.last())
            .map(|t| t.location)
            .unwrap_or_default()
    }

    // ========================================================================
    // Expression parsing
    // ========================================================================

    fn parse_expression(&mut self) -> ParseResult<&'a Expression<'a>> {
        self.parse_binary_expression(OperatorPrecedence::lowest())
    }

    /// Parse one precedence tier as a left fold: an operand, then for every
    /// operator of this tier, wrap everything so far as the left child.
    fn parse_binary_expression(&mut self, precedence: OperatorPrecedence) -> ParseResult<&'a Expression<'a>> {
        let mut left = self.parse_operand(precedence)?;

        while let Some(operator) = self.match_any(binary_operators_at(precedence)) {
            let right = self.parse_operand(precedence)?;
            left = self.arena.alloc(Expression::Binary(BinaryExpr {
                location: left.location(),
                operator,
                left,
                right,
            }));
        }

        Ok(left)
    }

    /// An operand of `precedence`: the next tighter tier, or a factor.
    fn parse_operand(&mut self, precedence: OperatorPrecedence) -> ParseResult<&'a Expression<'a>> {
        match precedence.next_higher() {
            Some(higher) => self.parse_binary_expression(higher),
            None => self.parse_factor(),
        }
    }

    fn parse_factor(&mut self) -> ParseResult<&'a Expression<'a>> {
        let token = match self.peek(0) {
            Some(token) => token,
            None => return Err(self.error_at_end(&messages::EXPECTED_FACTOR)),
        };

        match &token.value {
            TokenValue::Literal(value) => {
                self.consume()?;
                Ok(self.arena.alloc(Expression::Literal(LiteralExpr {
                    location: token.location,
                    value: *value,
                })))
            }
            TokenValue::Identifier(name) => {
                self.consume()?;
                Ok(self.arena.alloc(Expression::Identifier(IdentifierExpr {
                    location: token.location,
                    name: self.arena.alloc_str(name),
                })))
            }
            _ if self.match_any(&[Separator::OpenParen]).is_some() => self.parse_parenthesized_expression(token),
            _ => Err(Diagnostic::with_location(
                token.location,
                &messages::UNEXPECTED_TOKEN_IN_FACTOR,
                &[],
            )),
        }
    }

    /// Everything after an opening `(`: a full expression, starting again
    /// from the loosest tier, then a mandatory `)`.
    fn parse_parenthesized_expression(&mut self, open: &Token) -> ParseResult<&'a Expression<'a>> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(Diagnostic::with_location(
                open.location,
                &messages::EXPRESSION_TOO_DEEPLY_NESTED,
                &[],
            ));
        }
        let inner = self.parse_expression()?;
        self.expect_sub(Separator::CloseParen, &messages::EXPECTED_CLOSE_PAREN)?;
        self.recursion_depth -= 1;
        Ok(inner)
    }
}
