//! CLI errors.

use std::path::PathBuf;

use mlisp_reader::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] ReadError),

    #[error("[{}]: {}", .0.kind().label(), .0.message())]
    Eval(#[from] mlisp_value::Error),

    #[error("line editor: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl CliError {
    /// Read and evaluation errors are rendered against their source when raised.
    pub fn is_rendered(&self) -> bool {
        matches!(self, CliError::Read(_) | CliError::Eval(_))
    }
}
