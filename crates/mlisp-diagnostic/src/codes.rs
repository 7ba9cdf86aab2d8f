//! Error codes for mlisp diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Reader errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    UnclosedDelimiter,
    UnexpectedDelimiter,
    OddMapEntries,
    LiteralOutOfRange,
    ZeroDenominator,

    // Eval errors (E0100 - E0199)
    MalformedForm,
    TypeMismatch,
    UnboundSymbol,
    InvalidValue,
    NumericOverflow,
    DivisionByZero,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Reader
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::UnclosedDelimiter => "E0003",
            ErrorCode::UnexpectedDelimiter => "E0004",
            ErrorCode::OddMapEntries => "E0005",
            ErrorCode::LiteralOutOfRange => "E0006",
            ErrorCode::ZeroDenominator => "E0007",

            // Eval
            ErrorCode::MalformedForm => "E0100",
            ErrorCode::TypeMismatch => "E0101",
            ErrorCode::UnboundSymbol => "E0102",
            ErrorCode::InvalidValue => "E0103",
            ErrorCode::NumericOverflow => "E0104",
            ErrorCode::DivisionByZero => "E0105",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            // Reader
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::UnclosedDelimiter => "unclosed delimiter",
            ErrorCode::UnexpectedDelimiter => "unexpected closing delimiter",
            ErrorCode::OddMapEntries => "map literal has a key without a value",
            ErrorCode::LiteralOutOfRange => "number literal does not fit in 64 bits",
            ErrorCode::ZeroDenominator => "rational literal has a zero denominator",

            // Eval
            ErrorCode::MalformedForm => "malformed special form",
            ErrorCode::TypeMismatch => "operand has the wrong type",
            ErrorCode::UnboundSymbol => "symbol is not bound in this scope",
            ErrorCode::InvalidValue => "value is structurally valid but not acceptable here",
            ErrorCode::NumericOverflow => "arithmetic result does not fit in 64 bits",
            ErrorCode::DivisionByZero => "division by zero",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::UnclosedDelimiter => Some("add the matching closing delimiter"),
            ErrorCode::UnexpectedDelimiter => Some("remove the extra delimiter or add its opening pair"),
            ErrorCode::OddMapEntries => Some("map literals need an even number of forms: `{k1 v1 k2 v2}`"),
            ErrorCode::UnboundSymbol => Some("check the spelling or bind it first with `def!`"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
