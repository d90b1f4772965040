mod completer;
mod helper;
mod highlighter;
mod hinter;

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};
use thiserror::Error;
use unitscript::{ScanOptions, UnitRegistry};

use self::helper::ReplHelper;
use crate::quantity;

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to initialize REPL: {0}")]
    Readline(#[from] ReadlineError),
}

pub const COMMANDS: [&str; 6] = [".help", ".units", ".lookup", ".load", ".rollback", ".exit"];

pub fn run(registry: UnitRegistry, options: ScanOptions) -> Result<(), ReplError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let registry = Rc::new(RefCell::new(registry));
    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper::new(Rc::clone(&registry), options)));

    println!(
        "{} {}",
        "unitscript".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if trimmed.starts_with('.') {
                    if !handle_command(trimmed, &mut registry.borrow_mut()) {
                        break;
                    }
                    continue;
                }
                run_snippet(&registry.borrow(), options, trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

/// Returns `false` when the session should end.
fn handle_command(trimmed: &str, registry: &mut UnitRegistry) -> bool {
    let (command, arg) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(c, a)| (c, a.trim()));

    match command {
        ".exit" => return false,
        ".help" => {
            println!("{}", ".help                show commands".bright_blue());
            println!("{}", ".units [prefix]      list unit symbols".bright_blue());
            println!("{}", ".lookup <symbol>     show a unit definition".bright_blue());
            println!("{}", ".load <file.json>    apply unit overrides".bright_blue());
            println!("{}", ".rollback            drop all overrides".bright_blue());
            println!("{}", ".exit                exit REPL".bright_blue());
            println!("{}", "  e.g. 12 kN/m^2 as psi".bright_black());
        }
        ".units" => {
            let symbols: Vec<&str> = registry
                .symbols()
                .into_iter()
                .filter(|s| s.starts_with(arg))
                .collect();
            println!("{}", symbols.join(" "));
            println!("{}", format!("{} symbols", symbols.len()).bright_black());
        }
        ".lookup" => match registry.get(arg) {
            Ok(spec) => println!("{spec}"),
            Err(err) => eprintln!("{} {err}", "error:".red().bold()),
        },
        ".load" => match fs::read_to_string(arg) {
            Ok(text) => match registry.load_overrides_json(&text) {
                Ok(count) => println!("{}", format!("{count} overrides applied").green()),
                Err(err) => eprintln!("{:?}", miette::Report::new(err)),
            },
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        },
        ".rollback" => {
            registry.rollback_to_defaults();
            println!("{}", "overrides cleared".green());
        }
        other => eprintln!(
            "{} unknown command '{other}' (try .help)",
            "error:".red().bold()
        ),
    }
    true
}

fn run_snippet(registry: &UnitRegistry, options: ScanOptions, source: &str) {
    match quantity::evaluate_line(source, options, registry) {
        Ok(results) => {
            for result in results {
                println!("{}", result.to_string().bright_white());
            }
        }
        Err(err) => {
            let report = miette::Report::new(err).with_source_code(source.to_string());
            eprintln!("{report:?}");
        }
    }
}

/// Open parentheses, a trailing `\`, or (with comments on) an open block
/// comment continue onto the next line.
pub fn needs_more_input(source: &str, options: ScanOptions) -> bool {
    let mut depth = 0i32;
    let mut in_comment = false;
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_comment = false;
            }
            continue;
        }
        match ch {
            '/' if options.comments && chars.peek() == Some(&'/') => {
                // Line comment: skip to the end of the line.
                for next in chars.by_ref() {
                    if next == '\n' || next == '\r' {
                        break;
                    }
                }
            }
            '/' if options.comments && chars.peek() == Some(&'*') => {
                chars.next();
                in_comment = true;
            }
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }

    in_comment || depth > 0 || source.trim_end().ends_with('\\')
}
