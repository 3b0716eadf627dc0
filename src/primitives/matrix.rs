//! Matrix type for 2D numeric data.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};
use crate::kernel;

/// A 2D matrix of floating-point values (row-major storage).
///
/// The arithmetic methods validate shapes and return typed errors before
/// delegating to the flat [`kernel`](crate::kernel), which itself performs no
/// checking.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                format!("{} values ({rows}x{cols})", rows * cols),
                format!("{} values", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix and returns the row-major buffer, for handing back
    /// to a host representation.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: kernel::add(self.rows, self.cols, &self.data, &other.data),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: kernel::sub(self.rows, self.cols, &self.data, &other.data),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner dimensions don't agree.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                format!("{} rows (cols of left operand)", self.cols),
                format!("{} rows", other.rows),
            ));
        }
        Ok(Self {
            data: kernel::matmul(
                self.rows, self.cols, other.rows, other.cols, &self.data, &other.data,
            ),
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Computes the inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] for a non-square input and
    /// [`MatrizError::SingularMatrix`] when no pivot reaches
    /// [`kernel::PIVOT_THRESHOLD`].
    pub fn inverse(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let inv = kernel::invert(self.rows, &self.data);
        if inv.is_empty() {
            return Err(MatrizError::SingularMatrix { order: self.rows });
        }
        Ok(Self {
            data: inv,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Right-division: `self x other^-1`.
    ///
    /// Pure composition of [`Matrix::inverse`] and [`Matrix::matmul`].
    ///
    /// # Errors
    ///
    /// Returns an error if `other` is not square, is singular, or its order
    /// doesn't match this matrix's column count.
    pub fn div(&self, other: &Self) -> Result<Self> {
        let inv = other.inverse()?;
        self.matmul(&inv)
    }

    /// Parses a matrix from whitespace-separated values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error on an unparsable token or when the value count
    /// doesn't equal `rows * cols`.
    pub fn from_text(rows: usize, cols: usize, text: &str) -> Result<Self> {
        let data = text
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| MatrizError::Other(format!("invalid number: {tok}")))
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::from_vec(rows, cols, data)
    }

    /// Renders the matrix with one row per line and three decimal places,
    /// values separated by single spaces.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{:.3}", self.get(i, j));
            }
            if i < self.rows - 1 {
                out.push('\n');
            }
        }
        out
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrizError::dimension_mismatch(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract_tests;
