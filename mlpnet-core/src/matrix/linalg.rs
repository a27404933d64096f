// src/matrix/linalg.rs
// Matrix product and transpose.

use super::{Matrix, Scalar};
use crate::error::MlpError;

impl<T: Scalar> Matrix<T> {
    /// Performs matrix multiplication C = A @ B.
    /// A: [M, K], B: [K, N] -> C: [M, N]
    ///
    /// # Errors
    /// Returns `MlpError::IncompatibleShapes` if the inner dimensions differ.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MlpError> {
        if self.cols != other.rows {
            return Err(MlpError::IncompatibleShapes {
                shape1: self.shape(),
                shape2: other.shape(),
            });
        }

        let m = self.rows;
        let k = self.cols; // == other.rows
        let n = other.cols;

        let mut output = vec![T::zero(); m * n];
        // i-l-j loop order walks both operands row-major.
        for i in 0..m {
            let out_row = &mut output[i * n..(i + 1) * n];
            for l in 0..k {
                let a = self.data[i * k + l];
                if a == T::zero() {
                    continue;
                }
                let b_row = &other.data[l * n..(l + 1) * n];
                for (o, &b) in out_row.iter_mut().zip(b_row.iter()) {
                    *o += a * b;
                }
            }
        }
        Matrix::new(output, m, n)
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

#[cfg(test)]
#[path = "linalg_test.rs"]
mod tests;
