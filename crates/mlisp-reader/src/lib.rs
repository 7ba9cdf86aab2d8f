//! Reader for mlisp.
//! mlisp 读取器。
//!
//! Turns source text into [`Value`] trees. Each top-level form becomes
//! one value; reader macros such as `'x` expand to two-element lists.

mod atom;
mod error;
mod parser;

pub use atom::classify;
pub use error::ReadError;
pub use parser::Parser;

use mlisp_common::Span;
use mlisp_value::Value;
use tracing::debug;

/// Read the first form of `source`. Empty input reads as `nil`.
pub fn read(source: &str) -> Result<Value, ReadError> {
    let form = Parser::new(source).next_form()?.unwrap_or(Value::Nil);
    debug!(form = %form, "read");
    Ok(form)
}

/// Read every top-level form of `source`.
pub fn read_all(source: &str) -> Result<Vec<Value>, ReadError> {
    Ok(read_spanned(source)?.into_iter().map(|(form, _)| form).collect())
}

/// Read every top-level form of `source` with the span it was read from.
pub fn read_spanned(source: &str) -> Result<Vec<(Value, Span)>, ReadError> {
    let mut parser = Parser::new(source);
    let mut forms = Vec::new();
    while let Some(form) = parser.next_spanned()? {
        forms.push(form);
    }
    debug!(count = forms.len(), "read all forms");
    Ok(forms)
}
