//! Binary operators over values.
//!
//! Every operator either produces a value or fails with a type error
//! naming both operand types. Numeric operands follow the tower in
//! [`crate::number`]; vectors and matrices work elementwise and accept a
//! scalar on the right.

use std::cmp::Ordering;

use crate::number::{Arith, Number};
use crate::{Error, Result, Value};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Eq => "=",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    fn arith(&self) -> Option<Arith> {
        match self {
            BinOp::Add => Some(Arith::Add),
            BinOp::Sub => Some(Arith::Sub),
            BinOp::Mul => Some(Arith::Mul),
            BinOp::Div => Some(Arith::Div),
            _ => None,
        }
    }
}

/// The type error raised when an operator does not apply to a pair.
pub fn invalid_operands(op: BinOp, lhs: &Value, rhs: &Value) -> Error {
    Error::type_error(format!(
        "invalid operands type for '{}': {} @ {}",
        op.symbol(),
        lhs.type_name(),
        rhs.type_name()
    ))
}

impl Value {
    /// Apply a binary operator.
    pub fn binary(&self, op: BinOp, rhs: &Value) -> Result<Value> {
        match op {
            BinOp::Eq => Ok(Value::Bool(self == rhs)),
            BinOp::Ne => Ok(Value::Bool(self != rhs)),
            BinOp::Lt => self.compare(op, rhs, Ordering::is_lt),
            BinOp::Le => self.compare(op, rhs, Ordering::is_le),
            BinOp::Gt => self.compare(op, rhs, Ordering::is_gt),
            BinOp::Ge => self.compare(op, rhs, Ordering::is_ge),
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => {
                let arith = op.arith().ok_or_else(|| invalid_operands(op, self, rhs))?;
                self.arithmetic(op, arith, rhs)
            }
        }
    }

    pub fn add(&self, rhs: &Value) -> Result<Value> {
        self.binary(BinOp::Add, rhs)
    }

    pub fn sub(&self, rhs: &Value) -> Result<Value> {
        self.binary(BinOp::Sub, rhs)
    }

    pub fn mul(&self, rhs: &Value) -> Result<Value> {
        self.binary(BinOp::Mul, rhs)
    }

    pub fn div(&self, rhs: &Value) -> Result<Value> {
        self.binary(BinOp::Div, rhs)
    }

    fn compare(&self, op: BinOp, rhs: &Value, test: fn(Ordering) -> bool) -> Result<Value> {
        let (Some(a), Some(b)) = (self.as_number(), rhs.as_number()) else {
            return Err(invalid_operands(op, self, rhs));
        };
        // NaN compares false under every ordering operator.
        Ok(Value::Bool(a.num_cmp(&b).is_some_and(test)))
    }

    fn arithmetic(&self, op: BinOp, arith: Arith, rhs: &Value) -> Result<Value> {
        if let (Some(a), Some(b)) = (self.as_number(), rhs.as_number()) {
            return Number::arith(arith, a, b).map(Value::from_number);
        }
        match (self, rhs) {
            (Value::NumVector(a), Value::NumVector(b)) => Ok(Value::NumVector(a.zip_with(arith, b)?.into())),
            (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::Matrix(a.zip_with(arith, b)?.into())),
            (Value::NumVector(a), scalar) => match scalar.as_f64() {
                Some(x) => Ok(Value::NumVector(a.broadcast(arith, x)?.into())),
                None => Err(invalid_operands(op, self, rhs)),
            },
            (Value::Matrix(a), scalar) => match scalar.as_f64() {
                Some(x) => Ok(Value::Matrix(a.broadcast(arith, x)?.into())),
                None => Err(invalid_operands(op, self, rhs)),
            },
            _ => Err(invalid_operands(op, self, rhs)),
        }
    }
}
