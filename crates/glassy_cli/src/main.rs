//! glassyc: The glassy compiler CLI.
//!
//! Usage:
//!   glassyc [options] <file.glassy>
//!
//! Compiles one glassy source file to NASM x86-64 assembly.

use clap::{Parser as ClapParser, ValueEnum};
use glassy_compiler::{CompileOptions, EmitKind, Session};
use miette::{bail, IntoDiagnostic, WrapErr};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SOURCE_EXTENSION: &str = "glassy";

#[derive(ClapParser, Debug)]
#[command(name = "glassyc", version, about = "glassy - compile .glassy programs to x86-64 assembly")]
struct Cli {
    /// Source file to compile.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output path. Defaults to the input path with the extension of the emitted kind.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// What to emit.
    #[arg(long, value_enum, default_value_t = Emit::Asm)]
    emit: Emit,

    /// Do not comment assembly with the statement it came from.
    #[arg(long = "no-annotate")]
    no_annotate: bool,

    /// Print the syntax tree to stdout.
    #[arg(long = "print-ast")]
    print_ast: bool,

    /// Increase log output (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    Asm,
    Source,
    Tree,
}

impl Emit {
    fn kind(self) -> EmitKind {
        match self {
            Emit::Asm => EmitKind::Assembly,
            Emit::Source => EmitKind::SourceText,
            Emit::Tree => EmitKind::Tree,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Emit::Asm => "asm",
            Emit::Source => "out.glassy",
            Emit::Tree => "tree",
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.file.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        bail!(
            "expected a .{} source file, got '{}'",
            SOURCE_EXTENSION,
            cli.file.display()
        );
    }

    let source = std::fs::read_to_string(&cli.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not read '{}'", cli.file.display()))?;

    let options = CompileOptions {
        emit: cli.emit.kind(),
        annotate_assembly: !cli.no_annotate,
        dump_tree: cli.print_ast,
        ..CompileOptions::default()
    };
    let mut session = Session::new(options);
    let output = match session.compile(&source) {
        Ok(output) => output,
        Err(diagnostic) => glassy_diagnostics::fail(&diagnostic),
    };

    if let Some(tree) = &output.tree {
        print!("{}", tree);
    }

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.file, cli.emit));
    std::fs::write(&out_path, &output.text)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not write '{}'", out_path.display()))?;

    tracing::debug!(
        output = %out_path.display(),
        statements = output.statement_count,
        "wrote output"
    );
    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_output_path(input: &Path, emit: Emit) -> PathBuf {
    input.with_extension(emit.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["glassyc", "prog.glassy", "-o", "a.s", "--emit", "tree", "-vv"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("prog.glassy"));
        assert_eq!(cli.output, Some(PathBuf::from("a.s")));
        assert_eq!(cli.emit, Emit::Tree);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.print_ast);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("dir/prog.glassy"), Emit::Asm),
            PathBuf::from("dir/prog.asm")
        );
        assert_eq!(
            default_output_path(Path::new("prog.glassy"), Emit::Tree),
            PathBuf::from("prog.tree")
        );
    }
}
