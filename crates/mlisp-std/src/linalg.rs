//! Numeric vector and matrix construction.
//! 数值向量与矩阵。

use mlisp_value::{Arity, BuiltinFn, Error, Matrix, Result, Value};
use rand::Rng;
use tracing::debug;

/// Default upper bound for `randmat`.
const RANDMAT_MAX: i64 = i32::MAX as i64;

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        (
            "nvector",
            Value::Builtin(BuiltinFn {
                name: "nvector",
                arity: Arity::Exact(1),
                func: |args, _| {
                    let items = sequence("nvector", &args[0])?;
                    Ok(Value::num_vector(floats("nvector", items)?))
                },
            }),
        ),
        // (matrix [1 2 ; 3 4])
        (
            "matrix",
            Value::Builtin(BuiltinFn {
                name: "matrix",
                arity: Arity::Exact(1),
                func: |args, _| {
                    let items = sequence("matrix", &args[0])?;
                    if items.is_empty() {
                        return Ok(Value::matrix(Matrix::default()));
                    }
                    let rows = items
                        .split(|item| item.is_symbol(";"))
                        .map(|row| floats("matrix", row))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(Value::matrix(Matrix::from_rows(rows)?))
                },
            }),
        ),
        (
            "eye",
            Value::Builtin(BuiltinFn {
                name: "eye",
                arity: Arity::Exact(1),
                func: |args, _| Ok(Value::matrix(Matrix::identity(dimension("eye", &args[0])?)?)),
            }),
        ),
        (
            "zeros",
            Value::Builtin(BuiltinFn {
                name: "zeros",
                arity: Arity::Range(1, 2),
                func: |args, _| {
                    let (rows, cols) = shape("zeros", args)?;
                    Ok(Value::matrix(Matrix::zeros(rows, cols)?))
                },
            }),
        ),
        (
            "randmat",
            Value::Builtin(BuiltinFn {
                name: "randmat",
                arity: Arity::Range(1, 4),
                func: |args, _| {
                    let (rows, cols) = shape("randmat", args)?;
                    let min = args.get(2).map_or(Ok(0), |v| integer("randmat", v))?;
                    let max = args.get(3).map_or(Ok(RANDMAT_MAX), |v| integer("randmat", v))?;
                    check_bounds("randmat", min, max)?;
                    debug!(rows, cols, min, max, "randmat");
                    let mut rng = rand::thread_rng();
                    Ok(Value::matrix(Matrix::from_fn(rows, cols, |_, _| {
                        if max == min {
                            min as f64
                        } else {
                            rng.gen_range(min..max) as f64
                        }
                    })?))
                },
            }),
        ),
        (
            "randmatf",
            Value::Builtin(BuiltinFn {
                name: "randmatf",
                arity: Arity::Range(1, 4),
                func: |args, _| {
                    let (rows, cols) = shape("randmatf", args)?;
                    let min = args.get(2).map_or(Ok(0.0), |v| float("randmatf", v))?;
                    let max = args.get(3).map_or(Ok(1.0), |v| float("randmatf", v))?;
                    if !(min.is_finite() && max.is_finite()) {
                        return Err(Error::value("'randmatf' bounds must be finite"));
                    }
                    check_bounds("randmatf", min, max)?;
                    debug!(rows, cols, min, max, "randmatf");
                    let mut rng = rand::thread_rng();
                    Ok(Value::matrix(Matrix::from_fn(rows, cols, |_, _| {
                        if max == min {
                            min
                        } else {
                            rng.gen_range(min..max)
                        }
                    })?))
                },
            }),
        ),
        (
            "transpose",
            Value::Builtin(BuiltinFn {
                name: "transpose",
                arity: Arity::Exact(1),
                func: |args, _| match &args[0] {
                    Value::Matrix(m) => Ok(Value::matrix(m.transpose())),
                    other => Err(expected("transpose", "a matrix", other)),
                },
            }),
        ),
    ]
}

fn expected(name: &str, what: &str, got: &Value) -> Error {
    Error::type_error(format!("'{name}' expects {what}, got {}", got.type_name()))
}

fn sequence<'a>(name: &str, value: &'a Value) -> Result<&'a [Value]> {
    value.as_seq().ok_or_else(|| expected(name, "a list or vector", value))
}

fn float(name: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| expected(name, "a number", value))
}

fn floats(name: &str, items: &[Value]) -> Result<Vec<f64>> {
    items.iter().map(|item| float(name, item)).collect()
}

fn integer(name: &str, value: &Value) -> Result<i64> {
    value.as_int().ok_or_else(|| expected(name, "an integer", value))
}

/// A non-negative integer size.
fn dimension(name: &str, value: &Value) -> Result<usize> {
    let n = integer(name, value)?;
    usize::try_from(n)
        .map_err(|_| Error::value(format!("'{name}' dimension must be non-negative, got {n}")))
}

/// `m [n]`, with `n` defaulting to `m`.
fn shape(name: &str, args: &[Value]) -> Result<(usize, usize)> {
    let rows = dimension(name, &args[0])?;
    let cols = match args.get(1) {
        Some(v) => dimension(name, v)?,
        None => rows,
    };
    Ok((rows, cols))
}

fn check_bounds<T: PartialOrd + std::fmt::Display>(name: &str, min: T, max: T) -> Result<()> {
    if max < min {
        return Err(Error::value(format!(
            "'{name}' max must not be less than min, got min {min} and max {max}"
        )));
    }
    Ok(())
}
