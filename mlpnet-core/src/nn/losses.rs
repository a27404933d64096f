// src/nn/losses.rs

use crate::error::MlpError;
use crate::matrix::{Matrix, Scalar};

/// Half mean squared error: `0.5 * mean((prediction - target)^2)`.
///
/// The mean runs over every entry, i.e. over outputs and samples.
///
/// # Errors
/// Returns `MlpError::ShapeMismatch` if the shapes differ, and
/// `MlpError::InvalidConfiguration` for empty inputs.
pub fn mse_loss<T: Scalar>(prediction: &Matrix<T>, target: &Matrix<T>) -> Result<T, MlpError> {
    let error = prediction.sub(target)?;
    half_mean_square(&error)
}

/// `0.5 * mean(error ⊙ error)` for an already computed error matrix.
pub(crate) fn half_mean_square<T: Scalar>(error: &Matrix<T>) -> Result<T, MlpError> {
    let squared = error.hadamard(error)?;
    Ok(T::from_f64(0.5) * squared.mean_all()?)
}
