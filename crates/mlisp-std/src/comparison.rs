//! Comparison and logical operations.

use mlisp_value::{Arity, BinOp, BuiltinFn, Value};

pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        (
            "=",
            Value::Builtin(BuiltinFn {
                name: "=",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Eq, &args[1]),
            }),
        ),
        (
            "!=",
            Value::Builtin(BuiltinFn {
                name: "!=",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Ne, &args[1]),
            }),
        ),
        // Ordering is only defined on numbers
        (
            "<",
            Value::Builtin(BuiltinFn {
                name: "<",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Lt, &args[1]),
            }),
        ),
        (
            "<=",
            Value::Builtin(BuiltinFn {
                name: "<=",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Le, &args[1]),
            }),
        ),
        (
            ">",
            Value::Builtin(BuiltinFn {
                name: ">",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Gt, &args[1]),
            }),
        ),
        (
            ">=",
            Value::Builtin(BuiltinFn {
                name: ">=",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Ge, &args[1]),
            }),
        ),
        (
            "not",
            Value::Builtin(BuiltinFn {
                name: "not",
                arity: Arity::Exact(1),
                func: |args, _| Ok(Value::Bool(!args[0].is_truthy())),
            }),
        ),
    ]
}
