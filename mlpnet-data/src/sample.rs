use std::fmt;

/// One labelled observation: a fixed-length feature vector and its class name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    pub features: Vec<f64>,
    pub label: String,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: impl Into<String>) -> Self {
        Sample {
            features,
            label: label.into(),
        }
    }

    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let features: Vec<String> = self.features.iter().map(|v| v.to_string()).collect();
        write!(f, "Sample([{}], {})", features.join(","), self.label)
    }
}
