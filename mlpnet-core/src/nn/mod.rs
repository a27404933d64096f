// src/nn/mod.rs
// Layers, activations and the multilayer perceptron built from them.

pub mod activation;
pub mod config;
pub mod layer;
pub mod losses;
pub mod metrics;
pub mod network;

// Re-export common items
pub use activation::{Activation, ActivationKind};
pub use config::TrainOptions;
pub use layer::Layer;
pub use losses::mse_loss;
pub use network::{IterationReport, MultiLayerPerceptron};
