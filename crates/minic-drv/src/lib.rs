//! minic-drv - Scanner Driver
//!
//! The driver loads one source file, runs the scanner over it, and prints a
//! token table to stdout plus any diagnostics to stderr.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use minic_lex::{Scanner, Token};
use minic_util::{Collector, Diagnostic, LoadError};

/// Configuration for one driver run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The source file to scan.
    pub input_file: Option<PathBuf>,
    /// Print progress information to stderr.
    pub verbose: bool,
    /// Add the automaton-state column to the token table.
    pub states: bool,
    /// Print usage and exit.
    pub help: bool,
    /// Print the version and exit.
    pub version: bool,
}

/// Parse command line arguments.
pub fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    parse_args_from(&args[1..])
}

fn parse_args_from(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();

    for arg in args {
        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--states" {
            config.states = true;
        } else if arg.starts_with('-') {
            return Err(format!("Unknown option: {}", arg));
        } else if config.input_file.is_some() {
            return Err(format!("Unexpected extra input file: {}", arg));
        } else {
            config.input_file = Some(PathBuf::from(arg));
        }
    }

    Ok(config)
}

/// Print help message
pub fn print_help() {
    println!("minic scanner v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: minic [OPTIONS] <input file>");
    println!();
    println!("Options:");
    println!("  -h, --help     Print this help message");
    println!("  -V, --version  Print version information");
    println!("  -v, --verbose  Enable verbose output");
    println!("  --states       Add the automaton-state column to the token table");
    println!();
    println!("Examples:");
    println!("  minic program.mc            Scan program.mc and print its token table");
    println!("  minic --states program.mc   Also show the automaton state per token");
}

/// Print version
pub fn print_version() {
    println!("minic {}", env!("CARGO_PKG_VERSION"));
}

/// Loads the source text of `path`, insisting on valid UTF-8.
pub fn load_source(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Escapes control characters so multi-line lexemes (block comments) stay on
/// one table row.
fn escape_lexeme(lexeme: &str) -> String {
    let mut out = String::with_capacity(lexeme.len());
    for c in lexeme.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the token table.
///
/// Fixed-width columns `TYPE`, `LEXEME`, `LINE`; tokens that carry a state
/// label get a fourth `STATE` column.
pub fn render_token_table(tokens: &[Token]) -> String {
    let mut out = String::new();
    let has_states = tokens.iter().any(|t| t.state.is_some());

    if has_states {
        let _ = writeln!(out, "{:<20} {:<30} {:<10} {:<10}", "TYPE", "LEXEME", "LINE", "STATE");
    } else {
        let _ = writeln!(out, "{:<20} {:<30} {:<10}", "TYPE", "LEXEME", "LINE");
    }

    for token in tokens {
        let lexeme = escape_lexeme(&token.lexeme);
        match token.state {
            Some(state) => {
                let _ = writeln!(
                    out,
                    "{:<20} {:<30} {:<10} {:<10}",
                    token.kind.name(),
                    lexeme,
                    token.line,
                    state
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "{:<20} {:<30} {:<10}",
                    token.kind.name(),
                    lexeme,
                    token.line
                );
            }
        }
    }

    out
}

/// Renders the diagnostic list, one `Line <n>: <message>` per line.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        let _ = writeln!(out, "{}", diagnostic);
    }
    out
}

/// Runs the scanner over the configured input file and prints the results.
///
/// The token table goes to stdout, diagnostics go to stderr. Diagnostics in
/// the input are not a failure: the scan itself always finishes.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let path = config
        .input_file
        .as_deref()
        .ok_or_else(|| anyhow!("no input file provided"))?;

    if config.verbose {
        eprintln!("[verbose] Loading: {}", path.display());
    }
    let source = load_source(path)?;

    if config.verbose {
        eprintln!("[verbose] Scanning {} bytes", source.len());
    }
    let mut collector = Collector::new();
    let mut scanner = Scanner::new(&source, &mut collector);
    if config.states {
        scanner = scanner.with_state_tags();
    }
    let tokens = scanner.scan();
    let diagnostics = collector.into_diagnostics();

    if config.verbose {
        eprintln!(
            "[verbose] Produced {} tokens, {} diagnostics",
            tokens.len(),
            diagnostics.len()
        );
    }

    print!("{}", render_token_table(&tokens));
    if !diagnostics.is_empty() {
        eprint!("{}", render_diagnostics(&diagnostics));
    }

    Ok(())
}

/// Driver entry point: parses arguments and dispatches.
pub fn main() -> anyhow::Result<()> {
    let config = parse_args().map_err(|e| anyhow!(e))?;

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    run(&config)
}
