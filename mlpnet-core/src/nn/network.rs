use crate::error::MlpError;
use crate::matrix::Matrix;
use crate::nn::activation::ActivationKind;
use crate::nn::config::TrainOptions;
use crate::nn::layer::Layer;
use crate::nn::losses::half_mean_square;
use log::{debug, info};
use rand::Rng;
use std::path::Path;

/// Progress of one training iteration, handed to the observer passed to
/// [`MultiLayerPerceptron::train_with_observer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    /// 1-based iteration number.
    pub iteration: usize,
    /// `0.5 * mean((y_pred - y_true)^2)` before this iteration's update.
    pub loss: f64,
}

/// A feed-forward multilayer perceptron trained by full-batch gradient descent.
///
/// The network is *unbuilt* until [`build`](Self::build) creates its layer
/// chain; `train`, `feed_forward` and `save` fail with
/// `MlpError::UnbuiltNetwork` before that.
///
/// Every forward pass (including [`feed_forward`](Self::feed_forward))
/// overwrites the network's activation cache, so the network needs `&mut self`
/// for inference as well as for training.
#[derive(Debug, Clone)]
pub struct MultiLayerPerceptron {
    name: String,
    input_size: usize,
    output_size: usize,
    layers: Vec<Layer>,
    // y[i] is the input of layer i; y[L] is the network output.
    y: Vec<Matrix>,
    // dy[i] is the activation derivative matching y[i] (dy[0] unused).
    dy: Vec<Matrix>,
    // d[i] is the delta at boundary i (d[0] is never computed).
    d: Vec<Matrix>,
    loss: Option<f64>,
}

impl MultiLayerPerceptron {
    /// Creates an unbuilt network.
    pub fn new(name: impl Into<String>, input_size: usize, output_size: usize) -> Self {
        MultiLayerPerceptron {
            name: name.into(),
            input_size,
            output_size,
            layers: Vec::new(),
            y: Vec::new(),
            dy: Vec::new(),
            d: Vec::new(),
            loss: None,
        }
    }

    /// Builds the layer chain `input -> hidden[0] -> ... -> output` with sigmoid
    /// activations everywhere, discarding any previously trained parameters.
    pub fn build(&mut self, hidden_sizes: &[usize]) -> Result<(), MlpError> {
        self.build_with_activation(hidden_sizes, ActivationKind::Sigmoid)
    }

    /// Like [`build`](Self::build) with a chosen activation for every layer.
    pub fn build_with_activation(&mut self, hidden_sizes: &[usize], kind: ActivationKind) -> Result<(), MlpError> {
        self.build_with_rng(hidden_sizes, kind, &mut rand::thread_rng())
    }

    /// Like [`build_with_activation`](Self::build_with_activation) with an explicit
    /// random generator for the weight initialization.
    ///
    /// # Errors
    /// Returns `MlpError::InvalidConfiguration` if the input, output or any hidden
    /// size is zero. The network is left unbuilt in that case.
    pub fn build_with_rng<R: Rng + ?Sized>(
        &mut self,
        hidden_sizes: &[usize],
        kind: ActivationKind,
        rng: &mut R,
    ) -> Result<(), MlpError> {
        self.layers.clear();
        self.reset_cache();

        if let Some(pos) = hidden_sizes.iter().position(|&s| s == 0) {
            return Err(MlpError::InvalidConfiguration(format!(
                "hidden layer {} has size 0",
                pos
            )));
        }

        let mut sizes = Vec::with_capacity(hidden_sizes.len() + 2);
        sizes.push(self.input_size);
        sizes.extend_from_slice(hidden_sizes);
        sizes.push(self.output_size);

        let mut layers = Vec::with_capacity(sizes.len() - 1);
        for (i, pair) in sizes.windows(2).enumerate() {
            layers.push(Layer::with_rng(format!("layer{}", i), pair[0], pair[1], kind, &mut *rng)?);
        }
        self.layers = layers;
        self.reset_cache();

        debug!(
            "Built MultiLayerPerceptron '{}' with topology {:?} ({})",
            self.name, sizes, kind
        );
        Ok(())
    }

    /// Runs a forward pass and returns the network output (`output_size x n`).
    ///
    /// # Errors
    /// Returns `MlpError::UnbuiltNetwork` before `build`, and
    /// `MlpError::DimensionMismatch` if `x` does not have `input_size` rows.
    pub fn feed_forward(&mut self, x: &Matrix) -> Result<Matrix, MlpError> {
        self.ensure_built()?;
        self.check_input(x)?;
        self.forward_pass(x)?;
        Ok(self.y[self.layers.len()].clone())
    }

    /// Class decision (row index of the highest output) for every sample column.
    pub fn predict(&mut self, x: &Matrix) -> Result<Vec<usize>, MlpError> {
        Ok(self.feed_forward(x)?.argmax_columns())
    }

    /// Trains for exactly `options.max_iterations` full-batch iterations.
    ///
    /// See [`train_with_observer`](Self::train_with_observer).
    pub fn train(&mut self, x: &Matrix, y_true: &Matrix, options: &TrainOptions) -> Result<(), MlpError> {
        self.train_with_observer(x, y_true, options, |_| {})
    }

    /// Trains for exactly `options.max_iterations` full-batch iterations, calling
    /// `observer` once per iteration with the loss measured before that
    /// iteration's parameter update.
    ///
    /// `x` is `input_size x n`, `y_true` is `output_size x n`. Every argument is
    /// validated before anything is modified, so a failing call leaves the
    /// weights untouched.
    ///
    /// # Errors
    /// - `MlpError::UnbuiltNetwork` before `build`.
    /// - `MlpError::DimensionMismatch` if sample counts or row counts disagree.
    /// - `MlpError::InvalidConfiguration` for invalid options or an empty batch.
    pub fn train_with_observer<F>(
        &mut self,
        x: &Matrix,
        y_true: &Matrix,
        options: &TrainOptions,
        mut observer: F,
    ) -> Result<(), MlpError>
    where
        F: FnMut(&IterationReport),
    {
        self.ensure_built()?;
        if x.cols() != y_true.cols() {
            return Err(MlpError::DimensionMismatch {
                expected: x.cols(),
                actual: y_true.cols(),
                context: "train label sample count".to_string(),
            });
        }
        self.check_input(x)?;
        if y_true.rows() != self.output_size {
            return Err(MlpError::DimensionMismatch {
                expected: self.output_size,
                actual: y_true.rows(),
                context: "train label rows".to_string(),
            });
        }
        if x.cols() == 0 {
            return Err(MlpError::InvalidConfiguration(
                "cannot train on an empty batch".to_string(),
            ));
        }
        options.validate()?;

        let nlayers = self.layers.len();
        let step = options.learning_rate / x.cols() as f64;
        self.reset_cache();

        for j in 0..options.max_iterations {
            // Stage 1: feed forward
            self.forward_pass(x)?;

            let err = self.y[nlayers].sub(y_true)?;
            let loss = half_mean_square(&err)?;
            self.loss = Some(loss);
            info!("Iteration: {:>4} : loss: {}", j + 1, loss);
            observer(&IterationReport {
                iteration: j + 1,
                loss,
            });

            self.d[nlayers] = err.hadamard(&self.dy[nlayers])?;

            // Stage 2: back propagation
            for i in (1..nlayers).rev() {
                let upstream = self.layers[i].backward_signal(&self.d[i + 1])?;
                self.d[i] = upstream.hadamard(&self.dy[i])?;
            }

            // Stage 3: update weights and biases
            for i in 0..nlayers {
                let grad_w = self.d[i + 1].matmul(&self.y[i].transpose())?;
                let grad_b = self.d[i + 1].sum_rows();
                self.layers[i].apply_update(step, &grad_w, &grad_b)?;
            }
        }
        Ok(())
    }

    /// Writes the topology to `path`; the format follows the extension
    /// (`.dot` or `.json`).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MlpError> {
        crate::export::save(self, path)
    }

    fn forward_pass(&mut self, x: &Matrix) -> Result<(), MlpError> {
        let nlayers = self.layers.len();
        if self.y.len() != nlayers + 1 {
            self.reset_cache();
        }
        self.y[0] = x.clone();
        for i in 0..nlayers {
            let (y, dy) = self.layers[i].forward(&self.y[i])?;
            self.y[i + 1] = y;
            self.dy[i + 1] = dy;
        }
        Ok(())
    }

    fn reset_cache(&mut self) {
        let slots = self.layers.len() + 1;
        self.y = vec![Matrix::zeros(0, 0); slots];
        self.dy = vec![Matrix::zeros(0, 0); slots];
        self.d = vec![Matrix::zeros(0, 0); slots];
    }

    fn ensure_built(&self) -> Result<(), MlpError> {
        if self.layers.is_empty() {
            return Err(MlpError::UnbuiltNetwork);
        }
        Ok(())
    }

    fn check_input(&self, x: &Matrix) -> Result<(), MlpError> {
        if x.rows() != self.input_size {
            return Err(MlpError::DimensionMismatch {
                expected: self.input_size,
                actual: x.rows(),
                context: "network input rows".to_string(),
            });
        }
        Ok(())
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

    pub fn is_built(&self) -> bool {
        !self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Mutable access to a layer, e.g. to load known weights.
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Activation cache of the last forward pass: entry `i` is the input of
    /// layer `i`, the last entry is the network output.
    pub fn activations(&self) -> &[Matrix] {
        &self.y
    }

    /// Loss reported by the most recent training iteration.
    pub fn last_loss(&self) -> Option<f64> {
        self.loss
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
