//! The Iris flower dataset: class list, loader configuration and a
//! generator of Iris-like samples for runs without the data file.

use crate::csv_loader::CsvDataLoader;
use crate::encoding::LabelEncoder;
use crate::sample::Sample;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

pub const CLASSES: [&str; 3] = ["Iris-setosa", "Iris-versicolor", "Iris-virginica"];

/// sepal length, sepal width, petal length, petal width (cm)
pub const FEATURES: usize = 4;

// Per-class feature means and standard deviations of the UCI measurements.
const MEANS: [[f64; FEATURES]; 3] = [
    [5.006, 3.428, 1.462, 0.246],
    [5.936, 2.770, 4.260, 1.326],
    [6.588, 2.974, 5.552, 2.026],
];
const STD_DEVS: [[f64; FEATURES]; 3] = [
    [0.352, 0.379, 0.174, 0.105],
    [0.516, 0.314, 0.470, 0.198],
    [0.636, 0.322, 0.552, 0.275],
];
const MIN_MEASUREMENT: f64 = 0.1;

pub fn encoder() -> LabelEncoder {
    LabelEncoder::new(CLASSES)
}

/// Comma-separated `f1,f2,f3,f4,label` records without a header.
pub fn loader() -> CsvDataLoader {
    CsvDataLoader::new(FEATURES)
}

/// Draws `per_class` samples of every class from a normal distribution
/// around that class's mean measurements. Samples are grouped by class.
pub fn synthetic<R: Rng + ?Sized>(per_class: usize, rng: &mut R) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(per_class * CLASSES.len());
    for (class, label) in CLASSES.iter().enumerate() {
        for _ in 0..per_class {
            let features = (0..FEATURES)
                .map(|f| {
                    let z: f64 = StandardNormal.sample(&mut *rng);
                    (MEANS[class][f] + STD_DEVS[class][f] * z).max(MIN_MEASUREMENT)
                })
                .collect();
            samples.push(Sample::new(features, *label));
        }
    }
    samples
}
