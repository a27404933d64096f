use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_layer(input: usize, output: usize) -> Layer {
    let mut rng = StdRng::seed_from_u64(42);
    Layer::with_rng("test", input, output, ActivationKind::Sigmoid, &mut rng).unwrap()
}

#[test]
fn test_layer_creation_shapes() {
    let layer = seeded_layer(4, 5);
    assert_eq!(layer.name(), "test");
    assert_eq!(layer.input_size(), 4);
    assert_eq!(layer.output_size(), 5);
    assert_eq!(layer.weights().shape(), (5, 4));
    assert_eq!(layer.bias().shape(), (5, 1));
    assert_eq!(layer.activation_kind(), ActivationKind::Sigmoid);
}

#[test]
fn test_layer_init_range_and_zero_bias() {
    let layer = seeded_layer(4, 5);
    let r = (6.0f64 / 9.0).sqrt();
    assert!(layer.weights().as_slice().iter().all(|&w| w >= -r && w <= r));
    assert!(layer.bias().as_slice().iter().all(|&b| b == 0.0));
}

#[test]
fn test_layer_zero_size_is_rejected() {
    let result = Layer::new("bad", 0, 3, ActivationKind::Tanh);
    assert!(matches!(result, Err(MlpError::InvalidConfiguration(_))));
    let result = Layer::new("bad", 3, 0, ActivationKind::Tanh);
    assert!(matches!(result, Err(MlpError::InvalidConfiguration(_))));
}

#[test]
fn test_layer_forward_known_weights() -> Result<(), MlpError> {
    let mut layer = Layer::new("fixed", 3, 2, ActivationKind::Sigmoid)?;
    layer.set_weights(Matrix::new(vec![1.0, 0.0, -1.0, 0.0, 1.0, 0.0], 2, 3)?)?;
    layer.set_bias(Matrix::column_vector(vec![0.5, -0.5]))?;

    // Two samples as columns: [1,2,3] and [4,5,6]
    let x = Matrix::from_columns(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let (y, dy) = layer.forward(&x)?;
    assert_eq!(y.shape(), (2, 2));

    // Pre-activations: row0 = [-2+0.5, -2+0.5], row1 = [2-0.5, 5-0.5]
    let expected_z = [-1.5, -1.5, 1.5, 4.5];
    for (i, &z) in expected_z.iter().enumerate() {
        let s = 1.0 / (1.0 + (-z as f64).exp());
        assert_relative_eq!(y.as_slice()[i], s, epsilon = 1e-12);
        assert_relative_eq!(dy.as_slice()[i], s * (1.0 - s), epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_layer_forward_zero_input_zero_bias_gives_half() {
    let layer = seeded_layer(4, 5);
    let (y, _) = layer.forward(&Matrix::zeros(4, 3)).unwrap();
    assert!(y.as_slice().iter().all(|&v| v == 0.5));
}

#[test]
fn test_layer_forward_dimension_mismatch() {
    let layer = seeded_layer(4, 5);
    let result = layer.forward(&Matrix::zeros(3, 2));
    assert!(matches!(
        result,
        Err(MlpError::DimensionMismatch { expected: 4, actual: 3, .. })
    ));
}

#[test]
fn test_layer_backward_signal() -> Result<(), MlpError> {
    let mut layer = Layer::new("fixed", 3, 2, ActivationKind::Tanh)?;
    let w = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
    layer.set_weights(w.clone())?;
    let before = layer.clone();

    let delta = Matrix::from_columns(&[vec![1.0, -1.0]])?;
    let upstream = layer.backward_signal(&delta)?;
    assert_eq!(upstream.shape(), (3, 1));
    assert_eq!(upstream.as_slice(), &[-3.0, -3.0, -3.0]);
    assert_eq!(upstream, w.transpose().matmul(&delta)?);
    // Layer untouched
    assert_eq!(layer, before);

    assert!(layer.backward_signal(&Matrix::zeros(3, 1)).is_err());
    Ok(())
}

#[test]
fn test_set_weights_and_bias_shape_checks() {
    let mut layer = seeded_layer(2, 3);
    assert!(matches!(
        layer.set_weights(Matrix::zeros(2, 3)),
        Err(MlpError::ShapeMismatch { expected: (3, 2), actual: (2, 3), .. })
    ));
    assert!(layer.set_bias(Matrix::zeros(1, 3)).is_err());
    assert!(layer.set_bias(Matrix::zeros(3, 1)).is_ok());
}

#[test]
fn test_apply_update() -> Result<(), MlpError> {
    let mut layer = seeded_layer(2, 1);
    layer.set_weights(Matrix::new(vec![1.0, 1.0], 1, 2)?)?;
    let grad_w = Matrix::new(vec![2.0, -4.0], 1, 2)?;
    let grad_b = Matrix::column_vector(vec![10.0]);
    layer.apply_update(0.5, &grad_w, &grad_b)?;
    assert_eq!(layer.weights().as_slice(), &[0.0, 3.0]);
    assert_eq!(layer.bias().as_slice(), &[-5.0]);
    Ok(())
}
