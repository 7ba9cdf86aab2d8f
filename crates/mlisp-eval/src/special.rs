//! Special forms.
//!
//! A list whose head is one of these symbols is evaluated by a fixed rule
//! instead of generic application. Shape errors are syntax errors.

use std::rc::Rc;

use mlisp_value::{Closure, Env, Error, Result, Value};
use tracing::trace;

use crate::eval::eval;

/// The special forms recognized by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialForm {
    Def,
    Let,
    Do,
    If,
    Fn,
    Quote,
}

impl SpecialForm {
    pub fn from_symbol(name: &str) -> Option<Self> {
        match name {
            "def!" => Some(SpecialForm::Def),
            "let*" => Some(SpecialForm::Let),
            "do" => Some(SpecialForm::Do),
            "if" => Some(SpecialForm::If),
            "fn*" => Some(SpecialForm::Fn),
            "quote" => Some(SpecialForm::Quote),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpecialForm::Def => "def!",
            SpecialForm::Let => "let*",
            SpecialForm::Do => "do",
            SpecialForm::If => "if",
            SpecialForm::Fn => "fn*",
            SpecialForm::Quote => "quote",
        }
    }

    /// Evaluate `(head args...)`; `args` excludes the head symbol.
    pub fn eval(self, args: &[Value], env: &Env) -> Result<Value> {
        trace!(form = self.name(), args = args.len(), "special form");
        match self {
            SpecialForm::Def => eval_def(args, env),
            SpecialForm::Let => eval_let(args, env),
            SpecialForm::Do => eval_do(args, env),
            SpecialForm::If => eval_if(args, env),
            SpecialForm::Fn => eval_fn(args, env),
            SpecialForm::Quote => {
                let [form] = expect_args::<1>(self, args)?;
                Ok(form.clone())
            }
        }
    }
}

fn expect_args<const N: usize>(form: SpecialForm, args: &[Value]) -> Result<&[Value; N]> {
    args.try_into().map_err(|_| {
        Error::syntax(format!(
            "'{}' takes {N} args, but {} were given",
            form.name(),
            args.len()
        ))
    })
}

fn binding_name<'a>(form: SpecialForm, key: &'a Value) -> Result<&'a str> {
    key.as_symbol().ok_or_else(|| {
        Error::syntax(format!(
            "'{}' expects a symbol to bind, got {} {}",
            form.name(),
            key.type_name(),
            key
        ))
    })
}

/// `(def! key expr)`
fn eval_def(args: &[Value], env: &Env) -> Result<Value> {
    let [key, expr] = expect_args::<2>(SpecialForm::Def, args)?;
    let name = binding_name(SpecialForm::Def, key)?;
    let value = eval(expr, env)?;
    env.bind(name, value.clone());
    Ok(value)
}

/// `(let* [k1 e1 k2 e2 ...] body)`; each binding sees the ones before it.
fn eval_let(args: &[Value], env: &Env) -> Result<Value> {
    let [bindings, body] = expect_args::<2>(SpecialForm::Let, args)?;
    let pairs = bindings.as_seq().ok_or_else(|| {
        Error::syntax(format!(
            "'let*' bindings must be a list or vector, got {}",
            bindings.type_name()
        ))
    })?;
    if pairs.len() % 2 != 0 {
        return Err(Error::syntax(format!(
            "'let*' bindings must come in pairs, got {} forms",
            pairs.len()
        )));
    }

    let scope = env.child();
    for pair in pairs.chunks_exact(2) {
        let name = binding_name(SpecialForm::Let, &pair[0])?;
        let value = eval(&pair[1], &scope)?;
        scope.bind(name, value);
    }
    eval(body, &scope)
}

/// `(do expr*)`
fn eval_do(args: &[Value], env: &Env) -> Result<Value> {
    let mut result = Value::Nil;
    for expr in args {
        result = eval(expr, env)?;
    }
    Ok(result)
}

/// `(if cond then [else])`
fn eval_if(args: &[Value], env: &Env) -> Result<Value> {
    let (cond, then, otherwise) = match args {
        [cond, then] => (cond, then, None),
        [cond, then, otherwise] => (cond, then, Some(otherwise)),
        _ => {
            return Err(Error::syntax(format!(
                "'if' takes 2 or 3 args, but {} were given",
                args.len()
            )));
        }
    };
    if eval(cond, env)?.is_truthy() {
        eval(then, env)
    } else {
        otherwise.map_or(Ok(Value::Nil), |expr| eval(expr, env))
    }
}

/// `(fn* params body)`
fn eval_fn(args: &[Value], env: &Env) -> Result<Value> {
    let [params, body] = expect_args::<2>(SpecialForm::Fn, args)?;
    let params = params.as_seq().ok_or_else(|| {
        Error::syntax(format!(
            "'fn*' parameters must be a list or vector, got {}",
            params.type_name()
        ))
    })?;
    for param in params {
        binding_name(SpecialForm::Fn, param)?;
    }
    Ok(Value::Closure(Rc::new(Closure {
        params: params.to_vec(),
        body: body.clone(),
        env: env.clone(),
    })))
}
