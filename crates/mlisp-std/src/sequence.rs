//! List and sequence introspection.
//! 列表与序列操作。

use mlisp_value::{Arity, BuiltinFn, Error, Result, Value};

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        (
            "list",
            Value::Builtin(BuiltinFn {
                name: "list",
                arity: Arity::AtLeast(0),
                func: |args, _| Ok(Value::list(args.to_vec())),
            }),
        ),
        (
            "list?",
            Value::Builtin(BuiltinFn {
                name: "list?",
                arity: Arity::Exact(1),
                func: |args, _| Ok(Value::Bool(matches!(args[0], Value::List(_)))),
            }),
        ),
        (
            "empty?",
            Value::Builtin(BuiltinFn {
                name: "empty?",
                arity: Arity::Exact(1),
                func: |args, _| Ok(Value::Bool(length("empty?", &args[0])? == 0)),
            }),
        ),
        (
            "count",
            Value::Builtin(BuiltinFn {
                name: "count",
                arity: Arity::Exact(1),
                func: |args, _| {
                    let n = length("count", &args[0])?;
                    i64::try_from(n)
                        .map(Value::Int)
                        .map_err(|_| Error::out_of_range(format!("count {n} too large")))
                },
            }),
        ),
        (
            "type?",
            Value::Builtin(BuiltinFn {
                name: "type?",
                arity: Arity::Exact(1),
                func: |args, _| Ok(Value::symbol(&args[0].type_name())),
            }),
        ),
    ]
}

/// Element count of anything countable; a matrix counts its rows.
fn length(name: &str, value: &Value) -> Result<usize> {
    match value {
        Value::Nil => Ok(0),
        Value::List(items) | Value::Vector(items) => Ok(items.len()),
        Value::Map(map) => Ok(map.len()),
        Value::NumVector(v) => Ok(v.len()),
        Value::Matrix(m) => Ok(m.rows()),
        other => Err(Error::type_error(format!(
            "'{name}' expects a collection, got {}",
            other.type_name()
        ))),
    }
}
