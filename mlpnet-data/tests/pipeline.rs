use mlpnet_core::{ActivationKind, MultiLayerPerceptron, TrainOptions};
use mlpnet_data::{iris, shuffle, train_test_split, DataError, Dataset};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::write_csv;

#[test]
fn test_csv_round_trip_of_synthetic_iris() -> Result<(), DataError> {
    let samples = iris::synthetic(10, &mut StdRng::seed_from_u64(3));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iris.csv");
    write_csv(&path, &samples).unwrap();

    let loaded = iris::loader().load(&path)?;
    assert_eq!(loaded, samples);
    Ok(())
}

#[test]
fn test_load_split_encode_train() -> Result<(), DataError> {
    let mut rng = StdRng::seed_from_u64(17);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iris.csv");
    write_csv(&path, &iris::synthetic(50, &mut rng)).unwrap();

    let mut samples = iris::loader().load(&path)?;
    assert_eq!(samples.len(), 150);
    shuffle(&mut samples, &mut rng);
    let (train, test) = train_test_split(samples, 0.6)?;
    assert_eq!(train.len(), 91);
    assert_eq!(test.len(), 59);

    let encoder = iris::encoder();
    let (x_train, y_train) = encoder.encode(&train)?;
    let (x_test, y_test) = encoder.encode(&test)?;
    assert_eq!(x_train.shape(), (4, 91));
    assert_eq!(y_train.shape(), (3, 91));
    assert_eq!(y_test.shape(), (3, 59));
    // Every label column is one-hot
    for c in 0..y_train.cols() {
        let column = y_train.column(c).unwrap();
        assert_eq!(column.iter().sum::<f64>(), 1.0);
    }

    let mut net = MultiLayerPerceptron::new("mlp", iris::FEATURES, encoder.num_classes());
    net.build_with_rng(&[5], ActivationKind::Sigmoid, &mut rng)?;
    let mut losses = Vec::new();
    net.train_with_observer(&x_train, &y_train, &TrainOptions::default(), |r| losses.push(r.loss))?;
    assert_eq!(losses.len(), 100);
    assert!(losses[99] < losses[0]);

    let decisions = net.predict(&x_test)?;
    assert_eq!(decisions.len(), 59);
    assert!(decisions.iter().all(|&d| encoder.class_name(d).is_some()));
    Ok(())
}

#[test]
fn test_unknown_label_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iris.csv");
    std::fs::write(&path, "5.1,3.5,1.4,0.2,Iris-setosa\n6.0,2.2,5.0,1.5,Iris-unknown\n").unwrap();

    let samples = iris::loader().load(&path).unwrap();
    let dataset = mlpnet_data::VecDataset::new(samples);
    match iris::encoder().encode(&dataset) {
        Err(DataError::UnknownLabel(label)) => assert_eq!(label, "Iris-unknown"),
        other => panic!("Expected UnknownLabel, got {:?}", other.map(|_| ())),
    }
}
