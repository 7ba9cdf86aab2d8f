//! Runtime values.

use std::fmt;
use std::rc::Rc;

use crate::linalg::{Matrix, NumVector};
use crate::map::ValueMap;
use crate::number::{Number, Rational};
use crate::{Env, Error, Result};

/// A runtime value. Every piece of data the reader produces and the
/// evaluator manipulates is one of these.
#[derive(Clone)]
pub enum Value {
    Symbol(Rc<str>),
    /// 64-bit signed integer
    Int(i64),
    Float(f64),
    Rational(Rational),
    Bool(bool),
    Nil,
    List(Rc<Vec<Value>>),
    Vector(Rc<Vec<Value>>),
    Map(Rc<ValueMap>),
    /// Built-in function
    Builtin(BuiltinFn),
    /// User function created by `fn*`
    Closure(Rc<Closure>),
    NumVector(Rc<NumVector>),
    Matrix(Rc<Matrix>),
}

/// Signature of a native operation: evaluated arguments and the caller's environment.
pub type NativeFn = fn(&[Value], &Env) -> Result<Value>;

/// A built-in function.
#[derive(Clone, Copy)]
pub struct BuiltinFn {
    pub name: &'static str,
    pub arity: Arity,
    pub func: NativeFn,
}

impl BuiltinFn {
    /// Check the argument count, then run the native code.
    pub fn call(&self, args: &[Value], env: &Env) -> Result<Value> {
        self.arity.check(self.name, args.len())?;
        (self.func)(args, env)
    }
}

/// How many arguments a builtin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, n: usize) -> bool {
        match *self {
            Arity::Exact(k) => n == k,
            Arity::Range(lo, hi) => (lo..=hi).contains(&n),
            Arity::AtLeast(lo) => n >= lo,
        }
    }

    pub fn check(&self, name: &str, got: usize) -> Result<()> {
        if self.accepts(got) {
            Ok(())
        } else {
            Err(Error::arity(name, self, got))
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(k) => write!(f, "{k}"),
            Arity::Range(lo, hi) => write!(f, "{lo} to {hi}"),
            Arity::AtLeast(lo) => write!(f, "at least {lo}"),
        }
    }
}

/// A closure: parameter symbols, a body, and the frame it was defined in.
pub struct Closure {
    pub params: Vec<Value>,
    pub body: Value,
    pub env: Env,
}

impl Value {
    pub fn symbol(name: &str) -> Value {
        Value::Symbol(Rc::from(name))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Rc::new(items))
    }

    pub fn vector(items: Vec<Value>) -> Value {
        Value::Vector(Rc::new(items))
    }

    pub fn map(map: ValueMap) -> Value {
        Value::Map(Rc::new(map))
    }

    /// A normalized rational; fails with DivisionByZero when `denom` is 0.
    pub fn rational(numer: i64, denom: i64) -> Result<Value> {
        Rational::new(numer, denom).map(Value::Rational)
    }

    pub fn num_vector(data: Vec<f64>) -> Value {
        Value::NumVector(Rc::new(NumVector::new(data)))
    }

    pub fn matrix(matrix: Matrix) -> Value {
        Value::Matrix(Rc::new(matrix))
    }

    pub fn from_number(n: Number) -> Value {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Rational(r) => Value::Rational(r),
            Number::Float(f) => Value::Float(f),
        }
    }

    /// The type name reported by `type?` and in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Value::Symbol(_) => "<Symbol>".into(),
            Value::Int(_) => "<Integer>".into(),
            Value::Float(_) => "<Float>".into(),
            Value::Rational(_) => "<Rational>".into(),
            Value::Bool(_) => "<Bool>".into(),
            Value::Nil => "<Nil>".into(),
            Value::List(_) => "<List>".into(),
            Value::Vector(_) => "<Vector>".into(),
            Value::Map(_) => "<HashMap>".into(),
            Value::Builtin(_) | Value::Closure(_) => "<Function>".into(),
            Value::NumVector(_) => "<Nvector>".into(),
            Value::Matrix(m) => format!("Matrix({},{})", m.rows(), m.cols()),
        }
    }

    /// Check if the value is truthy: everything except `nil` and `false`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Builtin(_) | Value::Closure(_))
    }

    /// Is this the symbol `name`?
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, Value::Symbol(s) if &**s == name)
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric operand view of this value, if it is on the tower.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Rational(r) => Some(Number::Rational(*r)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// Any numeric value converted to a float.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.to_f64())
    }

    /// The elements of a List or Vector.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Vector(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Canonical textual form, used for display and for map-key hashing.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return a.num_eq(&b);
        }
        match (self, other) {
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::List(a) | Value::Vector(a), Value::List(b) | Value::Vector(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::NumVector(a), Value::NumVector(b)) => a.approx_eq(b),
            (Value::Matrix(a), Value::Matrix(b)) => a.approx_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            // Keep a decimal point so the text reads back as a float.
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Rational(r) => write!(f, "{r}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::List(items) => write_seq(f, "(", items, ")"),
            Value::Vector(items) => write_seq(f, "[", items, "]"),
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k} {v}")?;
                }
                f.write_str("}")
            }
            Value::Builtin(b) => write!(f, "#<Function:{}>", b.name),
            Value::Closure(_) => f.write_str("#<Function>"),
            Value::NumVector(v) => write!(f, "{v}"),
            Value::Matrix(m) => write!(f, "{m}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(s) => write!(f, "Symbol({s})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Rational(r) => write!(f, "Rational({r})"),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_equality_crosses_tags() {
        assert_eq!(Value::Int(2), Value::Float(2.0));
        assert_eq!(Value::rational(1, 2).unwrap(), Value::Float(0.5));
        assert_ne!(Value::Int(2), Value::symbol("2"));
    }

    #[test]
    fn render_forms() {
        let v = Value::list(vec![
            Value::symbol("+"),
            Value::Float(1.0),
            Value::rational(2, 4).unwrap(),
            Value::vector(vec![Value::Nil, Value::Bool(true)]),
        ]);
        assert_eq!(v.render(), "(+ 1.0 1/2 [nil true])");
    }

    #[test]
    fn only_nil_and_false_are_falsy() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Int(0).is_truthy());
        assert!(Value::Float(0.0).is_truthy());
        assert!(Value::list(vec![]).is_truthy());
    }
}
