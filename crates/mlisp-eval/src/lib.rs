//! Evaluator for mlisp.
//! mlisp 求值器。
//!
//! A tree-walking evaluator over [`Value`] trees: special forms are
//! dispatched on the head symbol, everything else is evaluated
//! element by element and applied.

mod eval;
mod special;

pub use eval::{apply, call_closure, eval, eval_each};
pub use special::SpecialForm;

use mlisp_value::{Env, Result, Value};

/// Evaluates forms against one long-lived root environment.
pub struct Evaluator {
    env: Env,
}

impl Evaluator {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluate a single form.
    pub fn eval(&self, form: &Value) -> Result<Value> {
        eval(form, &self.env)
    }

    /// Evaluate forms in order, returning the last value (`nil` if none).
    pub fn eval_all(&self, forms: &[Value]) -> Result<Value> {
        let mut result = Value::Nil;
        for form in forms {
            result = self.eval(form)?;
        }
        Ok(result)
    }
}
