//! The `mlisp repl` command.

use mlisp_eval::Evaluator;
use mlisp_reader::read_all;
use mlisp_std::root_environment;
use mlisp_value::{Result, Value};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::config::ReplConfig;
use crate::error::CliError;
use crate::output;

pub fn run(config: &ReplConfig) -> std::result::Result<(), CliError> {
    println!("mlisp REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new()?;

    if let Some(path) = &config.history {
        // A missing history file just means a first session.
        if let Err(err) = rl.load_history(path) {
            debug!(path = %path.display(), %err, "no history loaded");
        }
    }

    // One environment for the whole session
    let evaluator = Evaluator::new(root_environment());

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if line.starts_with(':') {
                    match line {
                        ":quit" | ":q" => break,
                        ":help" | ":h" => {
                            println!("Commands:");
                            println!("  :help, :h    Show this help");
                            println!("  :quit, :q    Exit the REPL");
                            println!("  :env         Show root bindings");
                        }
                        ":env" => println!("{}", evaluator.env().names().join(" ")),
                        _ => println!("Unknown command: {line}"),
                    }
                    continue;
                }

                match rep(&evaluator, line) {
                    Ok(value) => println!("{value}"),
                    Err(err) => output::report(&err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                output::error(&err.to_string());
                break;
            }
        }
    }

    if let Some(path) = &config.history {
        if let Err(err) = rl.save_history(path) {
            output::warning(&format!("could not save history to {}: {err}", path.display()));
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Read, then evaluate every form on the line; the last value is the result.
fn rep(evaluator: &Evaluator, line: &str) -> Result<Value> {
    let forms = read_all(line)?;
    evaluator.eval_all(&forms)
}
