use crate::error::MlpError;
use crate::matrix::Matrix;
use crate::nn::activation::{Activation, ActivationKind};
use log::debug;
use rand::Rng;

/// A fully connected layer: `y = activation(W·x + b)`.
///
/// `W` has shape `(output_size, input_size)` and `b` has shape `(output_size, 1)`.
/// Inputs hold one sample per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    weights: Matrix,
    bias: Matrix,
    input_size: usize,
    output_size: usize,
    activation: Activation,
}

impl Layer {
    /// Creates a layer with Xavier-style uniform weights and zero bias,
    /// drawing from the thread-local generator.
    ///
    /// # Errors
    /// Returns `MlpError::InvalidConfiguration` if either size is zero.
    pub fn new(
        name: impl Into<String>,
        input_size: usize,
        output_size: usize,
        kind: ActivationKind,
    ) -> Result<Self, MlpError> {
        Self::with_rng(name, input_size, output_size, kind, &mut rand::thread_rng())
    }

    /// Same as [`Layer::new`] with an explicit random generator.
    ///
    /// Weights are drawn independently from `U[-r, r]`, `r = sqrt(6 / (in + out))`.
    pub fn with_rng<R: Rng + ?Sized>(
        name: impl Into<String>,
        input_size: usize,
        output_size: usize,
        kind: ActivationKind,
        rng: &mut R,
    ) -> Result<Self, MlpError> {
        let name = name.into();
        if input_size == 0 || output_size == 0 {
            return Err(MlpError::InvalidConfiguration(format!(
                "layer '{}' must have non-zero sizes, got {} -> {}",
                name, input_size, output_size
            )));
        }

        let r = (6.0 / (input_size + output_size) as f64).sqrt();
        let weights = Matrix::random_uniform(output_size, input_size, -r, r, rng)?;
        let bias = Matrix::zeros(output_size, 1);
        debug!(
            "Layer '{}': {} -> {} ({}), init range ±{:.4}",
            name, input_size, output_size, kind, r
        );

        Ok(Layer {
            name,
            weights,
            bias,
            input_size,
            output_size,
            activation: Activation::new(kind),
        })
    }

    /// Feeds `x` (`input_size x n`) through the layer.
    ///
    /// Returns `(y, dy)`: the activation and the activation derivative, both
    /// `output_size x n`.
    ///
    /// # Errors
    /// Returns `MlpError::DimensionMismatch` if `x` does not have `input_size` rows.
    pub fn forward(&self, x: &Matrix) -> Result<(Matrix, Matrix), MlpError> {
        if x.rows() != self.input_size {
            return Err(MlpError::DimensionMismatch {
                expected: self.input_size,
                actual: x.rows(),
                context: format!("forward through layer '{}'", self.name),
            });
        }
        let z = self.weights.matmul(x)?.add_column_broadcast(&self.bias)?;
        Ok(self.activation.forward(&z))
    }

    /// Propagates an error signal to the previous layer: `Wᵗ·delta`.
    ///
    /// The activation derivative of the previous layer is not applied here.
    pub fn backward_signal(&self, delta: &Matrix) -> Result<Matrix, MlpError> {
        if delta.rows() != self.output_size {
            return Err(MlpError::DimensionMismatch {
                expected: self.output_size,
                actual: delta.rows(),
                context: format!("backward signal through layer '{}'", self.name),
            });
        }
        self.weights.transpose().matmul(delta)
    }

    /// Gradient step: `W -= step * grad_w`, `b -= step * grad_b`.
    pub(crate) fn apply_update(&mut self, step: f64, grad_w: &Matrix, grad_b: &Matrix) -> Result<(), MlpError> {
        self.weights.sub_scaled_assign(step, grad_w)?;
        self.bias.sub_scaled_assign(step, grad_b)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn activation_kind(&self) -> ActivationKind {
        self.activation.kind()
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    /// Replaces the weight matrix.
    ///
    /// # Errors
    /// Returns `MlpError::ShapeMismatch` unless `weights` is `(output_size, input_size)`.
    pub fn set_weights(&mut self, weights: Matrix) -> Result<(), MlpError> {
        if weights.shape() != self.weights.shape() {
            return Err(MlpError::ShapeMismatch {
                expected: self.weights.shape(),
                actual: weights.shape(),
                operation: "Layer::set_weights".to_string(),
            });
        }
        self.weights = weights;
        Ok(())
    }

    /// Replaces the bias vector.
    ///
    /// # Errors
    /// Returns `MlpError::ShapeMismatch` unless `bias` is `(output_size, 1)`.
    pub fn set_bias(&mut self, bias: Matrix) -> Result<(), MlpError> {
        if bias.shape() != self.bias.shape() {
            return Err(MlpError::ShapeMismatch {
                expected: self.bias.shape(),
                actual: bias.shape(),
                operation: "Layer::set_bias".to_string(),
            });
        }
        self.bias = bias;
        Ok(())
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
