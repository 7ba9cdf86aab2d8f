//! The `mlisp eval` command.

use mlisp_eval::Evaluator;
use mlisp_std::root_environment;

use crate::commands::{eval_forms, read_source};
use crate::error::CliError;
use crate::output;

pub fn run(expr: &str, verbose: bool) -> Result<(), CliError> {
    let forms = read_source(expr, "<eval>")?;

    if verbose {
        for (form, _) in &forms {
            output::info(&format!("form: {form}"));
        }
    }

    let evaluator = Evaluator::new(root_environment());
    let value = eval_forms(&evaluator, &forms, expr, "<eval>")?;
    println!("{value}");
    Ok(())
}
