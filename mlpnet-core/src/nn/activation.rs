use crate::error::MlpError;
use crate::matrix::{Matrix, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amplitude of the scaled hyperbolic tangent, `1.7159 * tanh(2/3 * z)`.
pub const SCALED_TANH_AMPLITUDE: f64 = 1.7159;
/// Input slope of the scaled hyperbolic tangent.
pub const SCALED_TANH_SLOPE: f64 = 2.0 / 3.0;

/// The activation functions a layer can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    /// `1 / (1 + exp(-z))`
    #[default]
    Sigmoid,
    /// `tanh(z)`
    Tanh,
    /// `1.7159 * tanh(2/3 * z)`
    TanhOpt,
}

impl ActivationKind {
    pub const ALL: [ActivationKind; 3] = [
        ActivationKind::Sigmoid,
        ActivationKind::Tanh,
        ActivationKind::TanhOpt,
    ];

    /// The name used in exported models and accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::Tanh => "tanh",
            ActivationKind::TanhOpt => "tanhopt",
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = MlpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            "tanh" => Ok(ActivationKind::Tanh),
            "tanhopt" => Ok(ActivationKind::TanhOpt),
            _ => Err(MlpError::UnknownActivation(s.to_string())),
        }
    }
}

/// A stateless elementwise activation together with its derivative.
///
/// The derivative is expressed in terms of the activation's *output*, so a
/// forward pass computes `value(z)` once and derives `dy` from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    kind: ActivationKind,
}

impl Activation {
    pub fn new(kind: ActivationKind) -> Self {
        Activation { kind }
    }

    /// Looks an activation up by name.
    ///
    /// # Errors
    /// Returns `MlpError::UnknownActivation` for any name other than
    /// `sigmoid`, `tanh` or `tanhopt`.
    pub fn from_name(name: &str) -> Result<Self, MlpError> {
        name.parse::<ActivationKind>().map(Activation::new)
    }

    pub fn kind(&self) -> ActivationKind {
        self.kind
    }

    /// Applies the activation to the pre-activation matrix `z`.
    pub fn value<T: Scalar>(&self, z: &Matrix<T>) -> Matrix<T> {
        match self.kind {
            ActivationKind::Sigmoid => z.map(|v| T::one() / (T::one() + (-v).exp())),
            ActivationKind::Tanh => z.map(|v| v.tanh()),
            ActivationKind::TanhOpt => {
                let a = T::from_f64(SCALED_TANH_AMPLITUDE);
                let s = T::from_f64(SCALED_TANH_SLOPE);
                z.map(|v| a * (s * v).tanh())
            }
        }
    }

    /// Derivative of the activation, given `y = value(z)`.
    pub fn derivative_from_value<T: Scalar>(&self, y: &Matrix<T>) -> Matrix<T> {
        match self.kind {
            ActivationKind::Sigmoid => y.map(|v| v * (T::one() - v)),
            ActivationKind::Tanh => y.map(|v| T::one() - v * v),
            ActivationKind::TanhOpt => {
                let a = T::from_f64(SCALED_TANH_AMPLITUDE);
                let s = T::from_f64(SCALED_TANH_SLOPE);
                y.map(|v| a * s * (T::one() - (v * v) / (a * a)))
            }
        }
    }

    /// Derivative of the activation evaluated at the pre-activation `z`.
    pub fn derivative<T: Scalar>(&self, z: &Matrix<T>) -> Matrix<T> {
        self.derivative_from_value(&self.value(z))
    }

    /// Returns `(value(z), derivative(z))` with a single evaluation of the activation.
    pub fn forward<T: Scalar>(&self, z: &Matrix<T>) -> (Matrix<T>, Matrix<T>) {
        let y = self.value(z);
        let dy = self.derivative_from_value(&y);
        (y, dy)
    }
}

impl From<ActivationKind> for Activation {
    fn from(kind: ActivationKind) -> Self {
        Activation::new(kind)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
