//! The `mlisp run` command.

use std::fs;
use std::path::Path;

use mlisp_eval::Evaluator;
use mlisp_std::root_environment;

use crate::commands::{eval_forms, read_source};
use crate::error::CliError;
use crate::output;

/// Evaluate every form of `file` in one root environment, stopping at the
/// first error.
pub fn run(file: &Path, verbose: bool) -> Result<(), CliError> {
    let source = fs::read_to_string(file).map_err(|source| CliError::Io {
        path: file.to_path_buf(),
        source,
    })?;

    let filename = file.display().to_string();
    let forms = read_source(&source, &filename)?;

    if verbose {
        output::info(&format!("read {} forms from {filename}", forms.len()));
    }

    let evaluator = Evaluator::new(root_environment());
    let value = eval_forms(&evaluator, &forms, &source, &filename)?;

    if verbose {
        output::info(&format!("result: {value}"));
    }
    Ok(())
}
