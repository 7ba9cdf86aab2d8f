//! Builtin library for mlisp.
//! mlisp 内置函数库。
//!
//! This crate provides the builtin functions and the root environment
//! every program starts in.
//! 本 crate 提供内置函数以及程序启动时的根环境。

mod arithmetic;
mod comparison;
mod io;
mod linalg;
mod sequence;

use mlisp_value::{Env, Value};

/// Return all builtin function bindings.
/// 返回所有内置函数绑定。
pub fn stdlib() -> Vec<(&'static str, Value)> {
    let mut bindings = Vec::new();
    bindings.extend(arithmetic::builtins());
    bindings.extend(comparison::builtins());
    bindings.extend(io::builtins());
    bindings.extend(linalg::builtins());
    bindings.extend(sequence::builtins());
    bindings
}

/// Literal bindings of the root frame. `;` evaluates to itself so it can
/// separate matrix rows inside an evaluated vector.
pub fn literals() -> Vec<(&'static str, Value)> {
    vec![
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("nil", Value::Nil),
        (";", Value::symbol(";")),
    ]
}

/// Build the root environment: builtins plus literals.
/// 构建根环境。
pub fn root_environment() -> Env {
    Env::with_bindings(stdlib().into_iter().chain(literals()))
}
