// src/matrix/create.rs

use super::{Matrix, Scalar};
use crate::error::MlpError;
use rand::Rng;
use rand_distr::uniform::SampleUniform;
use rand_distr::{Distribution, Uniform};

impl<T: Scalar> Matrix<T> {
    /// Creates a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::zero())
    }

    /// Creates a `rows x cols` matrix filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::one())
    }

    /// Creates a `rows x cols` matrix filled with `value`.
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Matrix {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix with the same shape as `other`, filled with zeros.
    pub fn zeros_like(other: &Matrix<T>) -> Self {
        Self::zeros(other.rows, other.cols)
    }

    /// Creates an `n x 1` column vector.
    pub fn column_vector(values: Vec<T>) -> Self {
        let rows = values.len();
        Matrix {
            data: values,
            rows,
            cols: 1,
        }
    }

    /// Stacks equally sized rows into a matrix.
    ///
    /// # Errors
    /// Returns `MlpError::DimensionMismatch` if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, MlpError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MlpError::DimensionMismatch {
                    expected: n_cols,
                    actual: row.len(),
                    context: format!("Matrix::from_rows row {}", i),
                });
            }
            data.extend_from_slice(row);
        }
        Matrix::new(data, rows.len(), n_cols)
    }

    /// Builds a matrix whose columns are the given vectors (one sample per column).
    ///
    /// # Errors
    /// Returns `MlpError::DimensionMismatch` if the columns have different lengths.
    pub fn from_columns(columns: &[Vec<T>]) -> Result<Self, MlpError> {
        let n_rows = columns.first().map_or(0, Vec::len);
        let n_cols = columns.len();
        let mut data = vec![T::zero(); n_rows * n_cols];
        for (c, column) in columns.iter().enumerate() {
            if column.len() != n_rows {
                return Err(MlpError::DimensionMismatch {
                    expected: n_rows,
                    actual: column.len(),
                    context: format!("Matrix::from_columns column {}", c),
                });
            }
            for (r, &value) in column.iter().enumerate() {
                data[r * n_cols + c] = value;
            }
        }
        Matrix::new(data, n_rows, n_cols)
    }

    /// Creates a matrix with entries drawn independently and uniformly from `[low, high]`.
    ///
    /// # Errors
    /// Returns `MlpError::InvalidConfiguration` if the range is empty or not finite.
    pub fn random_uniform<R>(rows: usize, cols: usize, low: T, high: T, rng: &mut R) -> Result<Self, MlpError>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        if !(low.is_finite() && high.is_finite() && low <= high) {
            return Err(MlpError::InvalidConfiguration(format!(
                "invalid uniform range [{}, {}]",
                low, high
            )));
        }
        let dist = Uniform::new_inclusive(low, high);
        let data: Vec<T> = (0..rows * cols).map(|_| dist.sample(rng)).collect();
        Matrix::new(data, rows, cols)
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
