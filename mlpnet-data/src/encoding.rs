use crate::dataset::Dataset;
use crate::error::DataError;
use crate::sample::Sample;
use mlpnet_core::Matrix;

/// Maps class names to one-hot rows, in the order the classes were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LabelEncoder {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Row index of `label` in the one-hot encoding.
    pub fn index_of(&self, label: &str) -> Result<usize, DataError> {
        self.classes
            .iter()
            .position(|c| c == label)
            .ok_or_else(|| DataError::UnknownLabel(label.to_string()))
    }

    /// Class name for a decision index, e.g. one returned by `predict`.
    pub fn class_name(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    pub fn one_hot(&self, label: &str) -> Result<Vec<f64>, DataError> {
        let mut encoded = vec![0.0; self.classes.len()];
        encoded[self.index_of(label)?] = 1.0;
        Ok(encoded)
    }

    /// Converts samples into `(features[dim x n], labels[classes x n])`, one
    /// sample per column.
    ///
    /// An empty dataset yields a `0 x 0` feature matrix and a `classes x 0`
    /// label matrix.
    ///
    /// # Errors
    ///
    /// - `DataError::UnknownLabel` for a label outside the class list.
    /// - `DataError::Core` if the samples do not share one feature length.
    pub fn encode<D>(&self, dataset: &D) -> Result<(Matrix, Matrix), DataError>
    where
        D: Dataset<Item = Sample>,
    {
        if dataset.is_empty() {
            return Ok((Matrix::zeros(0, 0), Matrix::zeros(self.classes.len(), 0)));
        }
        let mut features = Vec::with_capacity(dataset.len());
        let mut labels = Vec::with_capacity(dataset.len());
        for i in 0..dataset.len() {
            let sample = dataset.get(i)?;
            labels.push(self.one_hot(&sample.label)?);
            features.push(sample.features);
        }
        Ok((Matrix::from_columns(&features)?, Matrix::from_columns(&labels)?))
    }
}
