//! Minimal feed-forward neural network engine.
//!
//! - [`matrix`]: dense matrix with samples stored as columns.
//! - [`nn`]: activations, fully connected layers and the [`MultiLayerPerceptron`]
//!   trained by full-batch gradient descent.
//! - [`export`]: topology export to Graphviz `.dot` or `.json`.

pub mod error;
pub mod export;
pub mod matrix;
pub mod nn;

pub use error::MlpError;
pub use export::ExportFormat;
pub use matrix::Matrix;
pub use nn::{Activation, ActivationKind, IterationReport, Layer, MultiLayerPerceptron, TrainOptions};
