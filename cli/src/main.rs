use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use miette::{NamedSource, Report};
use owo_colors::OwoColorize;
use unitscript::lexer::{self, token::TokenKind};
use unitscript::units::UnitStandard;
use unitscript::{Diagnostics, LexicalError, ScanOptions, SourceBuffer, UnitRegistry};

mod quantity;
mod repl;

#[derive(Parser)]
#[command(
    name = "unitscript",
    version,
    about = "Unit-aware engineering calculator",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Script to evaluate, one quantity per line
    file: Option<PathBuf>,
    /// Evaluate an inline script
    #[arg(long, short)]
    eval: Option<String>,
    /// Print the token stream
    #[arg(long)]
    tokens: bool,
    /// Treat quotes as string literals with backslash escapes
    #[arg(long)]
    strings: bool,
    /// Skip `//` and `/* */` comments
    #[arg(long)]
    comments: bool,
    /// JSON file of session unit overrides
    #[arg(long, global = true, value_name = "FILE")]
    units: Option<PathBuf>,
    /// Log registry and scanner activity (same as RUST_LOG=unitscript=debug)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the definition of a unit symbol or alias
    Lookup { symbol: String },
    /// Convert a value between two units
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// List registered unit symbols
    Units {
        /// Only list units of this standard (SI, US or Imperial)
        #[arg(long)]
        standard: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut registry = UnitRegistry::create_default();
    if let Some(path) = &cli.units {
        load_overrides(&mut registry, path);
    }

    let options = ScanOptions {
        quoted_strings: cli.strings,
        escapes: cli.strings,
        comments: cli.comments,
    };

    match cli.command {
        Some(Command::Lookup { symbol }) => lookup(&registry, &symbol),
        Some(Command::Convert { value, from, to }) => {
            match unitscript::convert_symbols(&registry, value, &from, &to) {
                Ok(result) => println!("{result} {}", to.bright_cyan()),
                Err(err) => fail(Report::new(err)),
            }
        }
        Some(Command::Units { standard }) => list_units(&registry, standard.as_deref()),
        None => run_source(cli.file, cli.eval, cli.tokens, options, registry),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = if verbose {
        EnvFilter::new("unitscript=debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_overrides(registry: &mut UnitRegistry, path: &Path) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "{} could not read '{}': {e}",
                "error:".red().bold(),
                path.display().yellow()
            );
            process::exit(1);
        }
    };
    match registry.load_overrides_json(&text) {
        Ok(count) => tracing::debug!(count, path = %path.display(), "loaded overrides"),
        Err(err) => fail(Report::new(err)),
    }
}

fn lookup(registry: &UnitRegistry, symbol: &str) {
    match registry.get(symbol) {
        Ok(spec) => {
            println!("{spec}");
            println!("  {} {}", "standard".bright_black(), spec.standard());
            if !spec.aliases().is_empty() {
                println!("  {} {}", "aliases".bright_black(), spec.aliases().join(", "));
            }
        }
        Err(err) => fail(Report::new(err)),
    }
}

fn list_units(registry: &UnitRegistry, standard: Option<&str>) {
    let standard = match standard.map(parse_standard) {
        Some(Some(standard)) => Some(standard),
        Some(None) => {
            eprintln!(
                "{} unknown standard (expected SI, US or Imperial)",
                "error:".red().bold()
            );
            process::exit(2);
        }
        None => None,
    };

    for symbol in registry.symbols() {
        let Some(spec) = registry.try_get(symbol) else {
            continue;
        };
        if standard.is_some_and(|s| s != spec.standard()) {
            continue;
        }
        println!("{:<12} {}", symbol.bright_cyan(), spec.name());
    }
}

fn parse_standard(text: &str) -> Option<UnitStandard> {
    match text.to_ascii_lowercase().as_str() {
        "si" => Some(UnitStandard::Si),
        "us" => Some(UnitStandard::Us),
        "imperial" | "imp" => Some(UnitStandard::Imperial),
        _ => None,
    }
}

fn run_source(
    file: Option<PathBuf>,
    eval: Option<String>,
    print_tokens: bool,
    options: ScanOptions,
    registry: UnitRegistry,
) {
    let (name, text) = match (eval, file) {
        (Some(code), _) => ("<eval>".to_string(), code),
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(text) => (path.display().to_string(), text),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    path.display().yellow()
                );
                process::exit(1);
            }
        },
        (None, None) => {
            if let Err(err) = repl::run(registry, options) {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
            return;
        }
    };

    let src = SourceBuffer::new(text);
    let tokens = lexer::lex_with(&src, options);

    if print_tokens {
        for token in &tokens {
            let kind = token.kind.to_string();
            let kind = match token.kind {
                TokenKind::Error(_) => kind.red().to_string(),
                TokenKind::Keyword(_) => kind.blue().to_string(),
                TokenKind::LiteralNumeric => kind.yellow().to_string(),
                _ => kind,
            };
            println!("{} {:<9} {:?} {kind}", "token".bright_black(), token.pos.to_string(), token.text());
        }
    }

    let mut diagnostics = Diagnostics::new();
    diagnostics.collect_scan_errors(&tokens);
    if diagnostics.has_errors() {
        for err in tokens.iter().filter_map(LexicalError::from_token) {
            eprintln!("{:?}", with_source(Report::new(err), &name, &src));
        }
        eprintln!(
            "{} {} lexical error(s)",
            "aborting:".red().bold(),
            diagnostics.error_count()
        );
        process::exit(1);
    }

    let lines = match quantity::parse_lines(&src, options) {
        Ok(lines) => lines,
        Err(err) => fail(with_source(Report::new(err), &name, &src)),
    };
    for line in &lines {
        match line.evaluate(&registry) {
            Ok(result) => println!("{result}"),
            Err(err) => fail(Report::new(err)),
        }
    }
}

fn with_source(report: Report, name: &str, src: &SourceBuffer) -> Report {
    report.with_source_code(NamedSource::new(name, src.content().to_string()))
}

fn fail(report: Report) -> ! {
    eprintln!("{report:?}");
    process::exit(1);
}
