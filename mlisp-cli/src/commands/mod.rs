//! CLI command implementations.

pub mod eval;
pub mod repl;
pub mod run;

use mlisp_common::Span;
use mlisp_diagnostic::{Diagnostic, DiagnosticKind, Label, emit};
use mlisp_eval::Evaluator;
use mlisp_reader::{ReadError, read_spanned};
use mlisp_value::{Error, Value};

use crate::error::CliError;

/// Read every form of `source`, rendering a reader failure against the
/// source before returning it.
pub fn read_source(source: &str, filename: &str) -> Result<Vec<(Value, Span)>, CliError> {
    read_spanned(source).map_err(|err: ReadError| {
        emit(source, filename, &err.to_diagnostic());
        CliError::from(err)
    })
}

/// Evaluate `forms` in order and return the last value. The first failure
/// is rendered against the form that raised it.
pub fn eval_forms(
    evaluator: &Evaluator,
    forms: &[(Value, Span)],
    source: &str,
    filename: &str,
) -> Result<Value, CliError> {
    let mut last = Value::Nil;
    for (form, span) in forms {
        last = evaluator.eval(form).map_err(|err| {
            emit(source, filename, &eval_diagnostic(&err, *span));
            CliError::from(err)
        })?;
    }
    Ok(last)
}

/// An evaluation error pointed at the top-level form it came from.
pub fn eval_diagnostic(err: &Error, span: Span) -> Diagnostic {
    let code = err.code();
    Diagnostic::error(DiagnosticKind::Eval, span, err.to_string())
        .with_code(code)
        .with_label(Label::new(span, "while evaluating this form"))
        .with_note(code.description())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlisp_diagnostic::ErrorCode;
    use mlisp_std::root_environment;

    #[test]
    fn eval_errors_carry_their_code() {
        let source = "(def! x 1)\n(+ x nil)";
        let forms = read_spanned(source).unwrap();
        let evaluator = Evaluator::new(root_environment());
        let err = eval_forms(&evaluator, &forms, source, "<test>").unwrap_err();
        assert!(matches!(err, CliError::Eval(Error::Type(_))));

        let diag = eval_diagnostic(&Error::type_error("bad"), forms[1].1);
        assert_eq!(diag.kind, DiagnosticKind::Eval);
        assert_eq!(diag.code, Some(ErrorCode::TypeMismatch));
        assert_eq!(diag.labels[0].span.range(), 11..20);
        assert_eq!(diag.notes, vec!["operand has the wrong type".to_string()]);
    }

    #[test]
    fn eval_forms_returns_last_value() {
        let source = "(def! x 2) (* x 3)";
        let forms = read_spanned(source).unwrap();
        let evaluator = Evaluator::new(root_environment());
        assert_eq!(eval_forms(&evaluator, &forms, source, "<test>").unwrap(), Value::Int(6));
    }
}
