//! Evaluation errors.

use mlisp_diagnostic::ErrorCode;
use thiserror::Error;

/// Result alias used by every fallible operation on values.
pub type Result<T> = std::result::Result<T, Error>;

/// The typed failures an mlisp operation can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed source or special-form shape.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Operand of the wrong variant, arity mismatch.
    #[error("type error: {0}")]
    Type(String),

    /// Unbound symbol, or application of something that is not a function.
    #[error("not found: {0}")]
    NotFound(String),

    /// Structurally valid but semantically invalid input.
    #[error("value error: {0}")]
    Value(String),

    /// Numeric literal or result outside the 64-bit range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("division by zero: {0}")]
    DivisionByZero(String),
}

/// The kind of an [`Error`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    Type,
    NotFound,
    Value,
    OutOfRange,
    DivisionByZero,
}

impl Error {
    pub fn syntax(msg: impl Into<String>) -> Self {
        Error::Syntax(msg.into())
    }

    pub fn type_error(msg: impl Into<String>) -> Self {
        Error::Type(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    pub fn value(msg: impl Into<String>) -> Self {
        Error::Value(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Error::OutOfRange(msg.into())
    }

    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Error::DivisionByZero(msg.into())
    }

    /// Wrong number of arguments passed to `name`.
    pub fn arity(name: &str, expected: impl std::fmt::Display, got: usize) -> Self {
        Error::Type(format!(
            "'{name}' takes {expected} args, but {got} were given"
        ))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::Type(_) => ErrorKind::Type,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Value(_) => ErrorKind::Value,
            Error::OutOfRange(_) => ErrorKind::OutOfRange,
            Error::DivisionByZero(_) => ErrorKind::DivisionByZero,
        }
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Syntax(msg)
            | Error::Type(msg)
            | Error::NotFound(msg)
            | Error::Value(msg)
            | Error::OutOfRange(msg)
            | Error::DivisionByZero(msg) => msg,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            ErrorKind::Syntax => ErrorCode::MalformedForm,
            ErrorKind::Type => ErrorCode::TypeMismatch,
            ErrorKind::NotFound => ErrorCode::UnboundSymbol,
            ErrorKind::Value => ErrorCode::InvalidValue,
            ErrorKind::OutOfRange => ErrorCode::NumericOverflow,
            ErrorKind::DivisionByZero => ErrorCode::DivisionByZero,
        }
    }
}

impl ErrorKind {
    /// Name used when reporting, e.g. `[TypeError]: ...`.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Type => "TypeError",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Value => "ValueError",
            ErrorKind::OutOfRange => "OutOfRange",
            ErrorKind::DivisionByZero => "DivisionByZero",
        }
    }
}
