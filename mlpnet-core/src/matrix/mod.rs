// src/matrix/mod.rs
// Dense row-major matrix used by every part of the engine.
//
// Samples are stored as columns: a batch of `n` feature vectors of size `d`
// is a `d x n` matrix.

pub mod arithmetic;
pub mod create;
pub mod linalg;
pub mod reduction;
pub mod scalar;

pub use scalar::Scalar;

use crate::error::MlpError;
use std::fmt;

/// A dense, real-valued 2-D matrix.
///
/// `Matrix` owns its data in row-major order. All operations allocate a new
/// result and leave their inputs untouched, except the explicit `*_assign`
/// and `set` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `MlpError::MatrixCreationError` if `data.len() != rows * cols`.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MlpError> {
        if data.len() != rows * cols {
            return Err(MlpError::MatrixCreationError {
                data_len: data.len(),
                shape: (rows, cols),
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the underlying data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `MlpError::DimensionMismatch` when the index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MlpError> {
        if row >= self.rows {
            return Err(MlpError::DimensionMismatch {
                expected: self.rows,
                actual: row,
                context: "Matrix::set row index".to_string(),
            });
        }
        if col >= self.cols {
            return Err(MlpError::DimensionMismatch {
                expected: self.cols,
                actual: col,
                context: "Matrix::set column index".to_string(),
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Copies row `r` out as a vector.
    pub fn row(&self, r: usize) -> Option<Vec<T>> {
        if r >= self.rows {
            return None;
        }
        Some(self.data[r * self.cols..(r + 1) * self.cols].to_vec())
    }

    /// Copies column `c` (one sample) out as a vector.
    pub fn column(&self, c: usize) -> Option<Vec<T>> {
        if c >= self.cols {
            return None;
        }
        Some((0..self.rows).map(|r| self.data[r * self.cols + c]).collect())
    }

    pub(crate) fn check_same_shape(&self, other: &Matrix<T>, operation: &str) -> Result<(), MlpError> {
        if self.shape() != other.shape() {
            return Err(MlpError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let row = &self.data[r * self.cols..(r + 1) * self.cols];
            let cells: Vec<String> = row.iter().map(|v| format!("{:.4}", v)).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
