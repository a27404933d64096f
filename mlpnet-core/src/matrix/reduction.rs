// src/matrix/reduction.rs

use super::{Matrix, Scalar};
use crate::error::MlpError;

impl<T: Scalar> Matrix<T> {
    /// Sums each row, producing a `rows x 1` column vector.
    pub fn sum_rows(&self) -> Matrix<T> {
        let data = (0..self.rows)
            .map(|r| {
                self.data[r * self.cols..(r + 1) * self.cols]
                    .iter()
                    .fold(T::zero(), |acc, &x| acc + x)
            })
            .collect();
        Matrix {
            data,
            rows: self.rows,
            cols: 1,
        }
    }

    /// Sum of all elements.
    pub fn sum_all(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Mean of all elements.
    ///
    /// # Errors
    /// Returns `MlpError::InvalidConfiguration` for an empty matrix.
    pub fn mean_all(&self) -> Result<T, MlpError> {
        if self.data.is_empty() {
            return Err(MlpError::InvalidConfiguration(
                "mean of an empty matrix".to_string(),
            ));
        }
        Ok(self.sum_all() / T::from_usize(self.data.len()))
    }

    /// Index of the largest entry in each column. Ties resolve to the lowest row.
    pub fn argmax_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .map(|c| {
                let mut best = 0;
                for r in 1..self.rows {
                    if self.data[r * self.cols + c] > self.data[best * self.cols + c] {
                        best = r;
                    }
                }
                best
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "reduction_test.rs"]
mod tests;
