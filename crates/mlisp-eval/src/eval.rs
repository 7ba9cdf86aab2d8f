//! Evaluation and function application.

use mlisp_value::{Closure, Env, Error, Result, Value, ValueMap};
use tracing::trace;

use crate::special::SpecialForm;

/// Evaluate one form in `env`.
pub fn eval(form: &Value, env: &Env) -> Result<Value> {
    match form {
        Value::Symbol(name) => env.lookup(name),
        Value::List(items) => {
            let Some((head, tail)) = items.split_first() else {
                return Ok(form.clone());
            };
            if let Some(special) = head.as_symbol().and_then(SpecialForm::from_symbol) {
                return special.eval(tail, env);
            }
            let func = eval(head, env)?;
            let args = eval_each(tail, env)?;
            apply(&func, &args, env)
        }
        Value::Vector(items) => Ok(Value::vector(eval_each(items, env)?)),
        Value::Map(map) => {
            let mut evaluated = ValueMap::new();
            for (key, value) in map.iter() {
                evaluated.insert(key.clone(), eval(value, env)?);
            }
            Ok(Value::map(evaluated))
        }
        _ => Ok(form.clone()),
    }
}

/// Evaluate each form left to right.
pub fn eval_each(forms: &[Value], env: &Env) -> Result<Vec<Value>> {
    forms.iter().map(|form| eval(form, env)).collect()
}

/// Apply an evaluated function to evaluated arguments.
pub fn apply(func: &Value, args: &[Value], env: &Env) -> Result<Value> {
    trace!(callee = %func, args = args.len(), "apply");
    match func {
        Value::Builtin(builtin) => builtin.call(args, env),
        Value::Closure(closure) => call_closure(closure, args),
        other => Err(Error::not_found(format!("<function> {other}()"))),
    }
}

/// Bind the parameters in a fresh frame under the captured environment,
/// then evaluate the body there.
pub fn call_closure(closure: &Closure, args: &[Value]) -> Result<Value> {
    let frame = closure.env.with_params(&closure.params, args)?;
    eval(&closure.body, &frame)
}
