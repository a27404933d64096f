// src/matrix/arithmetic.rs
// Elementwise operations and column broadcasting.

use super::{Matrix, Scalar};
use crate::error::MlpError;
use std::ops::{Mul, Neg};

impl<T: Scalar> Matrix<T> {
    /// Applies `f` to every element, producing a new matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combines two same-shaped matrices element by element.
    ///
    /// # Errors
    /// Returns `MlpError::ShapeMismatch` if the shapes differ.
    pub fn zip_map<F>(&self, other: &Matrix<T>, operation: &str, f: F) -> Result<Matrix<T>, MlpError>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_shape(other, operation)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Elementwise `self + other`.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MlpError> {
        self.zip_map(other, "add", |a, b| a + b)
    }

    /// Elementwise `self - other`.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MlpError> {
        self.zip_map(other, "sub", |a, b| a - b)
    }

    /// Elementwise (Hadamard) product `self ⊙ other`.
    pub fn hadamard(&self, other: &Matrix<T>) -> Result<Matrix<T>, MlpError> {
        self.zip_map(other, "hadamard", |a, b| a * b)
    }

    /// Multiplies every element by `factor`.
    pub fn scale(&self, factor: T) -> Matrix<T> {
        self.map(|x| x * factor)
    }

    /// In-place `self -= factor * other`.
    pub fn sub_scaled_assign(&mut self, factor: T, other: &Matrix<T>) -> Result<(), MlpError> {
        self.check_same_shape(other, "sub_scaled_assign")?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a -= factor * b;
        }
        Ok(())
    }

    /// Adds the `rows x 1` vector `column` to every column of `self`.
    ///
    /// # Errors
    /// Returns `MlpError::ShapeMismatch` unless `column` is `(self.rows, 1)`.
    pub fn add_column_broadcast(&self, column: &Matrix<T>) -> Result<Matrix<T>, MlpError> {
        if column.shape() != (self.rows, 1) {
            return Err(MlpError::ShapeMismatch {
                expected: (self.rows, 1),
                actual: column.shape(),
                operation: "add_column_broadcast".to_string(),
            });
        }
        let mut data = self.data.clone();
        for (r, row) in data.chunks_mut(self.cols.max(1)).enumerate().take(self.rows) {
            let offset = column.data[r];
            for value in row.iter_mut() {
                *value += offset;
            }
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
