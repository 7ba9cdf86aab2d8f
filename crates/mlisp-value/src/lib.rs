//! Value model for mlisp.
//! mlisp 的值模型。
//!
//! This crate defines the runtime [`Value`] type, the numeric tower,
//! dense vectors and matrices, lexical environments and the error type
//! shared by the reader, the evaluator and the builtin library.

mod env;
mod error;
pub mod linalg;
mod map;
pub mod number;
pub mod ops;
mod value;

pub use env::Env;
pub use error::{Error, ErrorKind, Result};
pub use linalg::{Matrix, NumVector};
pub use map::ValueMap;
pub use number::{Arith, EPSILON, Number, Rational};
pub use ops::BinOp;
pub use value::{Arity, BuiltinFn, Closure, NativeFn, Value};
