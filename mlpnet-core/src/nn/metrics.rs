// src/nn/metrics.rs
// Classification evaluation helpers.

use crate::error::MlpError;
use crate::matrix::{Matrix, Scalar};

/// Index of the highest score in each column (one decision per sample).
pub fn argmax_columns<T: Scalar>(scores: &Matrix<T>) -> Vec<usize> {
    scores.argmax_columns()
}

/// Fraction of samples whose argmax decision matches the one-hot ground truth.
///
/// Returns a value in `[0, 1]`.
///
/// # Errors
/// Returns `MlpError::DimensionMismatch` if the sample counts differ or there
/// are no samples.
pub fn accuracy<T: Scalar>(scores: &Matrix<T>, truth: &Matrix<T>) -> Result<f64, MlpError> {
    if scores.cols() != truth.cols() {
        return Err(MlpError::DimensionMismatch {
            expected: truth.cols(),
            actual: scores.cols(),
            context: "accuracy sample count".to_string(),
        });
    }
    if scores.cols() == 0 {
        return Err(MlpError::DimensionMismatch {
            expected: 1,
            actual: 0,
            context: "accuracy on an empty batch".to_string(),
        });
    }
    let decisions = scores.argmax_columns();
    let expected = truth.argmax_columns();
    let correct = decisions
        .iter()
        .zip(expected.iter())
        .filter(|(d, e)| d == e)
        .count();
    Ok(correct as f64 / decisions.len() as f64)
}
