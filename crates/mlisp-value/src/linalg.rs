//! Dense numeric vectors and matrices.
//!
//! A [`Matrix`] is stored row-major in one buffer, so every row has the
//! same length by construction. Operations that would need rows of
//! different lengths fail with a value error before building anything.

use std::fmt;

use crate::number::{Arith, EPSILON};
use crate::{Error, Result};

/// A dense sequence of floats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumVector {
    data: Vec<f64>,
}

impl NumVector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.data.get(idx).copied()
    }

    /// Elementwise equality within [`EPSILON`].
    pub fn approx_eq(&self, other: &NumVector) -> bool {
        approx_eq_slices(&self.data, &other.data)
    }

    /// Elementwise operation against a vector of the same length.
    pub fn zip_with(&self, op: Arith, rhs: &NumVector) -> Result<NumVector> {
        if self.len() != rhs.len() {
            return Err(Error::value(format!(
                "shape mismatch: nvectors of length {} and {}",
                self.len(),
                rhs.len()
            )));
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| op.apply_f64(*a, *b))
            .collect::<Result<Vec<_>>>()?;
        Ok(NumVector { data })
    }

    /// Inner product of two vectors of the same length.
    pub fn dot(&self, rhs: &NumVector) -> Result<f64> {
        if self.len() != rhs.len() {
            return Err(Error::value(format!(
                "nvector sizes don't match: {} ** {}",
                self.len(),
                rhs.len()
            )));
        }
        Ok(self.data.iter().zip(&rhs.data).map(|(a, b)| a * b).sum())
    }

    /// Apply `op` with the same scalar on the right of every element.
    pub fn broadcast(&self, op: Arith, scalar: f64) -> Result<NumVector> {
        let data = self
            .data
            .iter()
            .map(|a| op.apply_f64(*a, scalar))
            .collect::<Result<Vec<_>>>()?;
        Ok(NumVector { data })
    }
}

impl From<Vec<f64>> for NumVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

/// A rectangular grid of floats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Largest element count, and largest single dimension, a built matrix may have.
pub const MAX_ELEMENTS: usize = 1 << 24;

impl Matrix {
    /// An `m`×`n` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// The `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// An `m`×`n` matrix with element `(i, j)` set to `f(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        checked_len(rows, cols)?;
        Ok(Self::build(rows, cols, f))
    }

    /// Shapes derived from an existing matrix are already bounded.
    fn build(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Build from explicit rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::value(format!(
                "all rows in matrix must be the same size: row {idx} has {} columns, expected {cols}",
                row.len()
            )));
        }
        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    pub fn transpose(&self) -> Matrix {
        Self::build(self.cols, self.rows, |i, j| self.data[j * self.cols + i])
    }

    /// Standard matrix product; the inner dimensions must agree.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::value(format!(
                "matrix sizes don't match: {}x{} ** {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        Ok(Self::build(self.rows, rhs.cols, |i, j| {
            (0..self.cols)
                .map(|k| self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j])
                .sum()
        }))
    }

    /// Elementwise equality within [`EPSILON`]; shapes must match.
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.shape() == other.shape() && approx_eq_slices(&self.data, &other.data)
    }

    /// Elementwise operation against a matrix of the same shape.
    pub fn zip_with(&self, op: Arith, rhs: &Matrix) -> Result<Matrix> {
        if self.shape() != rhs.shape() {
            return Err(Error::value(format!(
                "shape mismatch: {}x{} {} {}x{}",
                self.rows,
                self.cols,
                op.symbol(),
                rhs.rows,
                rhs.cols
            )));
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(a, b)| op.apply_f64(*a, *b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix { data, ..*self })
    }

    /// Apply `op` with the same scalar on the right of every element.
    pub fn broadcast(&self, op: Arith, scalar: f64) -> Result<Matrix> {
        let data = self
            .data
            .iter()
            .map(|a| op.apply_f64(*a, scalar))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix { data, ..*self })
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .filter(|&len| len <= MAX_ELEMENTS && rows <= MAX_ELEMENTS && cols <= MAX_ELEMENTS)
        .ok_or_else(|| {
            Error::out_of_range(format!(
                "matrix of {rows}x{cols} exceeds {MAX_ELEMENTS} elements"
            ))
        })
}

fn approx_eq_slices(lhs: &[f64], rhs: &[f64]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| (a - b).abs() <= EPSILON)
}

/// Format one element the way vectors and matrices print them:
/// integral values without a fractional part.
pub(crate) fn format_element(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{x}")
    }
}

impl fmt::Display for NumVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.data.iter().map(|x| format_element(*x)).collect();
        write!(f, "[{}]", items.join(" "))
    }
}

impl fmt::Display for Matrix {
    /// Rows on separate lines, each column right-aligned to its widest entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|x| format_element(*x)).collect();
        let widths: Vec<usize> = (0..self.cols)
            .map(|j| {
                (0..self.rows)
                    .map(|i| cells[i * self.cols + j].len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        f.write_str("[")?;
        for i in 0..self.rows {
            if i > 0 {
                f.write_str("\n ")?;
            }
            for (j, width) in widths.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", cells[i * self.cols + j], width = width)?;
            }
        }
        f.write_str("]")
    }
}
