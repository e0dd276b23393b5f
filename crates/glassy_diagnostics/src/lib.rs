//! glassy_diagnostics: Diagnostic values and error reporting.
//!
//! The scanner, parser and emitter never terminate the process. Each one
//! stops at the first problem and returns a [`Diagnostic`] describing it; the
//! driver decides what to do with it, usually by calling [`fail`].

use glassy_core::text::SourceLocation;
use std::fmt;
use std::io::Write;

/// Which compilation phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// An input character does not begin any token.
    Lex,
    /// The token stream does not satisfy the grammar.
    Parse,
    /// The tree is well formed but cannot be lowered to assembly.
    Emit,
}

impl DiagnosticKind {
    /// Stable diagnostic code, as shown by miette.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::Lex => "glassy::lex",
            DiagnosticKind::Parse => "glassy::parse",
            DiagnosticKind::Emit => "glassy::emit",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lex => write!(f, "lex error"),
            DiagnosticKind::Parse => write!(f, "parse error"),
            DiagnosticKind::Emit => write!(f, "emit error"),
        }
    }
}

/// A message template. May contain `{0}`, `{1}`, ... placeholders.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub message: &'static str,
}

/// A realized diagnostic with resolved message text and optional location.
///
/// Renders as `<message> [Ln <line>, Col <col>]`, or just `<message>` when
/// there is no location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}{}", location_suffix(.location))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Create a diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            kind: message.kind,
            message: format_message(message.message, args),
            location: None,
        }
    }

    /// Create a diagnostic anchored at a source location.
    pub fn with_location(location: SourceLocation, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            kind: message.kind,
            message: format_message(message.message, args),
            location: Some(location),
        }
    }
}

fn location_suffix(location: &Option<SourceLocation>) -> String {
    match location {
        Some(location) => format!(" {}", location),
        None => String::new(),
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Write `diagnostic` to the error stream and terminate with status 1.
///
/// This is the process-level policy for an unrecoverable diagnostic. Library
/// code returns `Result<_, Diagnostic>` instead and leaves the call to the driver.
pub fn fail(diagnostic: &Diagnostic) -> ! {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    // Nothing useful can be done if stderr is gone; the exit still happens.
    let _ = writeln!(handle, "{}", diagnostic);
    let _ = handle.flush();
    std::process::exit(1)
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        (Lex, $msg:expr) => {
            DiagnosticMessage { kind: DiagnosticKind::Lex, message: $msg }
        };
        (Parse, $msg:expr) => {
            DiagnosticMessage { kind: DiagnosticKind::Parse, message: $msg }
        };
        (Emit, $msg:expr) => {
            DiagnosticMessage { kind: DiagnosticKind::Emit, message: $msg }
        };
    }

    // Scanner
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(Lex, "Invalid character '{0}'");
    pub const INVALID_NUMERIC_LITERAL: DiagnosticMessage = diag!(Lex, "Invalid numeric literal '{0}'");

    // Parser
    pub const EXPECTED_FACTOR: DiagnosticMessage = diag!(Parse, "Expected factor");
    pub const UNEXPECTED_TOKEN_IN_FACTOR: DiagnosticMessage = diag!(Parse, "Unexpected token in factor");
    pub const EXPECTED_CLOSE_PAREN: DiagnosticMessage = diag!(Parse, "Expected ')'");
    pub const EXPECTED_SEMICOLON: DiagnosticMessage = diag!(Parse, "Expected ';'");
    pub const EXPECTED_IDENTIFIER: DiagnosticMessage = diag!(Parse, "Expected identifier");
    pub const EXPECTED_EQUALS: DiagnosticMessage = diag!(Parse, "Expected '='");
    pub const UNEXPECTED_END_OF_FILE: DiagnosticMessage = diag!(Parse, "Unexpected end of file");
    pub const EXPRESSION_TOO_DEEPLY_NESTED: DiagnosticMessage = diag!(Parse, "Expression is nested too deeply");

    // Emitter
    pub const UNDECLARED_IDENTIFIER: DiagnosticMessage = diag!(Emit, "Undeclared identifier '{0}'");
    pub const IDENTIFIER_ALREADY_DECLARED: DiagnosticMessage = diag!(Emit, "Identifier '{0}' is already declared");
}
