//! Reader errors with source locations.

use mlisp_common::Span;
use mlisp_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use mlisp_value::Error;
use thiserror::Error;

/// A failure while reading, pointing at the token that caused it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct ReadError {
    pub error: Error,
    pub span: Span,
    pub code: ErrorCode,
}

impl ReadError {
    pub fn new(error: Error, span: Span, code: ErrorCode) -> Self {
        Self { error, span, code }
    }

    pub fn syntax(span: Span, code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::new(Error::syntax(msg), span, code)
    }

    /// Build a diagnostic suitable for [`mlisp_diagnostic::emit`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::UnclosedDelimiter => "opened here",
            ErrorCode::UnterminatedString => "string starts here",
            _ => "here",
        };
        Diagnostic::error(DiagnosticKind::Reader, self.span, self.error.to_string())
            .with_code(self.code)
            .with_label(Label::new(self.span, label))
    }
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        err.error
    }
}
