use mlpnet_core::Matrix;
use rand::Rng;

// Cluster centres of a linearly separable 3-class problem in 4 dimensions.
// The fourth feature carries no information.
const CENTRES: [[f64; 4]; 3] = [
    [3.0, -3.0, -3.0, 0.0],
    [-3.0, 3.0, -3.0, 0.0],
    [-3.0, -3.0, 3.0, 0.0],
];

/// Builds `(features[4 x n], one-hot labels[3 x n])` with `per_class` samples
/// per class, each jittered by up to `noise` in every feature.
#[allow(dead_code)]
pub fn separable_dataset<R: Rng>(per_class: usize, noise: f64, rng: &mut R) -> (Matrix, Matrix) {
    let mut features = Vec::with_capacity(per_class * 3);
    let mut labels = Vec::with_capacity(per_class * 3);
    for (class, centre) in CENTRES.iter().enumerate() {
        for _ in 0..per_class {
            features.push(
                centre
                    .iter()
                    .map(|&c| c + rng.gen_range(-noise..=noise))
                    .collect::<Vec<f64>>(),
            );
            let mut one_hot = vec![0.0; 3];
            one_hot[class] = 1.0;
            labels.push(one_hot);
        }
    }
    (
        Matrix::from_columns(&features).expect("features"),
        Matrix::from_columns(&labels).expect("labels"),
    )
}
