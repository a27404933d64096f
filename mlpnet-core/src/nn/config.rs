use crate::error::MlpError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for a full-batch gradient-descent run.
///
/// Training always performs exactly `max_iterations` passes over the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainOptions {
    pub max_iterations: usize,
    pub learning_rate: f64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        TrainOptions {
            max_iterations: 100,
            learning_rate: 0.1,
        }
    }
}

impl TrainOptions {
    pub fn new(max_iterations: usize, learning_rate: f64) -> Self {
        TrainOptions {
            max_iterations,
            learning_rate,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Checks that the iteration count and learning rate are positive.
    pub fn validate(&self) -> Result<(), MlpError> {
        if self.max_iterations == 0 {
            return Err(MlpError::InvalidConfiguration(
                "max_iterations must be positive".to_string(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MlpError::InvalidConfiguration(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Parses options from JSON; missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self, MlpError> {
        let options: TrainOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, MlpError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| MlpError::io(path, e))?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_options() {
        let opts = TrainOptions::default();
        assert_eq!(opts.max_iterations, 100);
        assert_eq!(opts.learning_rate, 0.1);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let opts = TrainOptions::default().with_max_iterations(7).with_learning_rate(0.5);
        assert_eq!(opts, TrainOptions::new(7, 0.5));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(TrainOptions::new(0, 0.1).validate().is_err());
        assert!(TrainOptions::new(10, 0.0).validate().is_err());
        assert!(TrainOptions::new(10, -1.0).validate().is_err());
        assert!(TrainOptions::new(10, f64::NAN).validate().is_err());
        assert!(TrainOptions::new(10, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let opts = TrainOptions::from_json_str(r#"{ "max_iterations": 250 }"#).unwrap();
        assert_eq!(opts.max_iterations, 250);
        assert_eq!(opts.learning_rate, 0.1);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            TrainOptions::from_json_str("{ not json"),
            Err(MlpError::Serialization(_))
        ));
        assert!(matches!(
            TrainOptions::from_json_str(r#"{ "learning_rate": -0.3 }"#),
            Err(MlpError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_iterations": 3, "learning_rate": 0.25 }}"#).unwrap();
        let opts = TrainOptions::from_json_file(file.path()).unwrap();
        assert_eq!(opts, TrainOptions::new(3, 0.25));

        let missing = TrainOptions::from_json_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(MlpError::Io { .. })));
    }
}
