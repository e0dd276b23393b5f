//! glassy_compiler: Compiler orchestration.
//!
//! Runs one compilation session: normalize the source, scan it, parse it into
//! a tree in the session arena, and lower the tree to the requested output.
//! The first diagnostic from any phase ends the session.

use glassy_core::arena::DEFAULT_ARENA_CAPACITY;
use glassy_core::CompilerArena;
use glassy_diagnostics::Diagnostic;
use glassy_emitter::Emitter;
use glassy_parser::Parser;
use glassy_scanner::Scanner;
use std::borrow::Cow;

/// What a session produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitKind {
    /// NASM x86-64 source.
    #[default]
    Assembly,
    /// Canonical glassy source text.
    SourceText,
    /// Indented outline of the syntax tree.
    Tree,
}

/// Compiler options.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Bytes reserved up front for the syntax tree arena.
    pub arena_capacity: usize,
    pub emit: EmitKind,
    /// Comment each assembly block with the statement it came from.
    pub annotate_assembly: bool,
    /// Also render the tree outline alongside the main output.
    pub dump_tree: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            arena_capacity: DEFAULT_ARENA_CAPACITY,
            emit: EmitKind::Assembly,
            annotate_assembly: true,
            dump_tree: false,
        }
    }
}

/// The result of a successful session.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The requested output text.
    pub text: String,
    /// The tree outline, when `dump_tree` was set.
    pub tree: Option<String>,
    pub token_count: usize,
    pub statement_count: usize,
}

/// Make sure the source ends with a newline, so the last line is terminated
/// even when the file is not.
pub fn normalize_source(source: &str) -> Cow<'_, str> {
    if source.is_empty() || source.ends_with('\n') {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(format!("{}\n", source))
    }
}

/// A compilation session. The arena is reused between calls to `compile`.
pub struct Session {
    options: CompileOptions,
    arena: CompilerArena,
}

impl Session {
    pub fn new(options: CompileOptions) -> Self {
        let arena = CompilerArena::with_capacity(options.arena_capacity);
        Self { options, arena }
    }

    /// Compile one source text. Any tree from a previous call is released first.
    pub fn compile(&mut self, source: &str) -> Result<CompileOutput, Diagnostic> {
        let _span = tracing::debug_span!("compile", bytes = source.len()).entered();
        self.arena.reset();

        let source = normalize_source(source);
        let tokens = Scanner::tokenize(&source)?;
        let program = Parser::new(&self.arena, &tokens).parse_program()?;

        let text = match self.options.emit {
            EmitKind::Assembly => Emitter::new()
                .with_annotations(self.options.annotate_assembly)
                .generate_assembly(&program)?,
            EmitKind::SourceText => glassy_printer::print_program(&program),
            EmitKind::Tree => glassy_printer::dump_tree(&program),
        };
        let tree = self.options.dump_tree.then(|| glassy_printer::dump_tree(&program));

        tracing::debug!(
            tokens = tokens.len(),
            statements = program.len(),
            output_bytes = text.len(),
            "compiled"
        );
        Ok(CompileOutput {
            text,
            tree,
            token_count: tokens.len(),
            statement_count: program.len(),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CompileOptions::default())
    }
}

/// Compile `source` to assembly with default options.
pub fn compile(source: &str) -> Result<String, Diagnostic> {
    Session::default().compile(source).map(|output| output.text)
}
