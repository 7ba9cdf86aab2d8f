//! The numeric tower: Integer → Rational → Float.

use std::cmp::Ordering;
use std::fmt;

use crate::{Error, Result};

/// Tolerance for float equality and for treating a divisor as zero.
pub const EPSILON: f64 = f64::EPSILON;

/// An exact fraction, always in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    /// Build a normalized rational. A zero denominator is a division by zero.
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        Self::from_i128(numer as i128, denom as i128)
    }

    /// Normalize a wide fraction, failing if it does not fit back into `i64`.
    pub(crate) fn from_i128(numer: i128, denom: i128) -> Result<Self> {
        if denom == 0 {
            return Err(Error::division_by_zero(format!("{numer}/{denom}")));
        }
        let sign = if denom < 0 { -1 } else { 1 };
        let g = gcd(numer, denom).max(1);
        let n = sign * numer / g;
        let d = sign * denom / g;
        match (i64::try_from(n), i64::try_from(d)) {
            (Ok(numer), Ok(denom)) => Ok(Rational { numer, denom }),
            _ => Err(Error::out_of_range(format!("{n}/{d} does not fit in 64 bits"))),
        }
    }

    pub fn from_int(n: i64) -> Self {
        Rational { numer: n, denom: 1 }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn add(&self, rhs: &Rational) -> Result<Rational> {
        let (a, b, c, d) = self.wide(rhs);
        Self::from_i128(a * d + c * b, b * d)
    }

    pub fn sub(&self, rhs: &Rational) -> Result<Rational> {
        let (a, b, c, d) = self.wide(rhs);
        Self::from_i128(a * d - c * b, b * d)
    }

    pub fn mul(&self, rhs: &Rational) -> Result<Rational> {
        let (a, b, c, d) = self.wide(rhs);
        Self::from_i128(a * c, b * d)
    }

    pub fn div(&self, rhs: &Rational) -> Result<Rational> {
        if rhs.is_zero() {
            return Err(Error::division_by_zero(format!("{self} {rhs}")));
        }
        let (a, b, c, d) = self.wide(rhs);
        Self::from_i128(a * d, b * c)
    }

    fn wide(&self, rhs: &Rational) -> (i128, i128, i128, i128) {
        (
            self.numer as i128,
            self.denom as i128,
            rhs.numer as i128,
            rhs.denom as i128,
        )
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        let (a, b, c, d) = self.wide(other);
        (a * d).cmp(&(c * b))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A numeric operand lifted out of a `Value` for arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Rational(Rational),
    Float(f64),
}

/// The arithmetic operators of the tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arith {
    Add,
    Sub,
    Mul,
    Div,
}

impl Arith {
    pub fn symbol(&self) -> &'static str {
        match self {
            Arith::Add => "+",
            Arith::Sub => "-",
            Arith::Mul => "*",
            Arith::Div => "/",
        }
    }

    /// Apply to two floats, rejecting a near-zero divisor.
    pub fn apply_f64(&self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Arith::Add => Ok(lhs + rhs),
            Arith::Sub => Ok(lhs - rhs),
            Arith::Mul => Ok(lhs * rhs),
            Arith::Div => {
                if rhs.abs() <= EPSILON {
                    Err(Error::division_by_zero(format!("{lhs} / {rhs}")))
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl Number {
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Rational(r) => r.to_f64(),
            Number::Float(f) => *f,
        }
    }

    fn to_rational(self) -> Option<Rational> {
        match self {
            Number::Int(n) => Some(Rational::from_int(n)),
            Number::Rational(r) => Some(r),
            Number::Float(_) => None,
        }
    }

    /// Apply an arithmetic operator following the promotion rules:
    /// any Float makes the result Float, otherwise any Rational (or an
    /// Integer division) makes it Rational, otherwise it stays Integer.
    pub fn arith(op: Arith, lhs: Number, rhs: Number) -> Result<Number> {
        if let (Number::Int(a), Number::Int(b)) = (lhs, rhs) {
            let overflow = || Error::out_of_range(format!("{a} {} {b} overflows", op.symbol()));
            return match op {
                Arith::Add => a.checked_add(b).map(Number::Int).ok_or_else(overflow),
                Arith::Sub => a.checked_sub(b).map(Number::Int).ok_or_else(overflow),
                Arith::Mul => a.checked_mul(b).map(Number::Int).ok_or_else(overflow),
                Arith::Div => {
                    if b == 0 {
                        return Err(Error::division_by_zero(format!("{a} / {b}")));
                    }
                    Rational::new(a, b).map(Number::Rational)
                }
            };
        }

        match (lhs.to_rational(), rhs.to_rational()) {
            (Some(a), Some(b)) => {
                let result = match op {
                    Arith::Add => a.add(&b),
                    Arith::Sub => a.sub(&b),
                    Arith::Mul => a.mul(&b),
                    Arith::Div => a.div(&b),
                }?;
                Ok(Number::Rational(result))
            }
            _ => op.apply_f64(lhs.to_f64(), rhs.to_f64()).map(Number::Float),
        }
    }

    /// Equality across the tower: exact within Integer or Rational pairs,
    /// otherwise by float value within [`EPSILON`].
    pub fn num_eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Rational(a), Number::Rational(b)) => a == b,
            _ => (self.to_f64() - other.to_f64()).abs() <= EPSILON,
        }
    }

    /// Ordering across the tower. `None` only when a NaN is involved.
    pub fn num_cmp(&self, other: &Number) -> Option<Ordering> {
        match (self.to_rational(), other.to_rational()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}
