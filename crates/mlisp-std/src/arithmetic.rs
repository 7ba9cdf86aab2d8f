//! Arithmetic operations.
//! 算术运算。

use mlisp_value::{Arity, BinOp, BuiltinFn, Error, Value};

/// Returns all arithmetic builtins.
/// 返回所有算术内置函数。
pub fn builtins() -> Vec<(&'static str, Value)> {
    vec![
        (
            "+",
            Value::Builtin(BuiltinFn {
                name: "+",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Add, &args[1]),
            }),
        ),
        (
            "-",
            Value::Builtin(BuiltinFn {
                name: "-",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Sub, &args[1]),
            }),
        ),
        (
            "*",
            Value::Builtin(BuiltinFn {
                name: "*",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Mul, &args[1]),
            }),
        ),
        (
            "/",
            Value::Builtin(BuiltinFn {
                name: "/",
                arity: Arity::Exact(2),
                func: |args, _| args[0].binary(BinOp::Div, &args[1]),
            }),
        ),
        // Matrix product, or inner product of two nvectors
        (
            "**",
            Value::Builtin(BuiltinFn {
                name: "**",
                arity: Arity::Exact(2),
                func: |args, _| match (&args[0], &args[1]) {
                    (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::matrix(a.dot(b)?)),
                    (Value::NumVector(a), Value::NumVector(b)) => Ok(Value::Float(a.dot(b)?)),
                    (a, b) => Err(Error::type_error(format!(
                        "invalid operands type for '**': {} @ {}",
                        a.type_name(),
                        b.type_name()
                    ))),
                },
            }),
        ),
    ]
}
