use super::*;
use std::io::Write;

const IRIS_HEAD: &str = "5.1,3.5,1.4,0.2,Iris-setosa
7.0,3.2,4.7,1.4,Iris-versicolor
6.3,3.3,6.0,2.5,Iris-virginica
";

#[test]
fn test_load_records() {
    let samples = CsvDataLoader::new(4).load_from_reader(IRIS_HEAD.as_bytes()).unwrap();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0], Sample::new(vec![5.1, 3.5, 1.4, 0.2], "Iris-setosa"));
    assert_eq!(samples[1].label, "Iris-versicolor");
    assert_eq!(samples[2].features, vec![6.3, 3.3, 6.0, 2.5]);
}

#[test]
fn test_blank_lines_and_whitespace_are_ignored() {
    let text = "\n5.1, 3.5, 1.4, 0.2, Iris-setosa\n\n\n7.0,3.2,4.7,1.4,Iris-versicolor\n\n";
    let samples = CsvDataLoader::new(4).load_from_reader(text.as_bytes()).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].label, "Iris-setosa");
    assert_eq!(samples[0].features[3], 0.2);
}

#[test]
fn test_skip_and_delimiter() {
    let text = "a;b;label\n1.5;2.5;x\n3;4;y\n";
    let loader = CsvDataLoader::new(2).with_delimiter(b';').with_skip(1);
    assert_eq!(loader.delimiter(), b';');
    assert_eq!(loader.skip(), 1);
    let samples = loader.load_from_reader(text.as_bytes()).unwrap();
    assert_eq!(samples, vec![
        Sample::new(vec![1.5, 2.5], "x"),
        Sample::new(vec![3.0, 4.0], "y"),
    ]);
}

#[test]
fn test_wrong_field_count_is_malformed() {
    let text = "5.1,3.5,1.4,0.2,Iris-setosa\n5.1,3.5,1.4,Iris-setosa\n";
    match CsvDataLoader::new(4).load_from_reader(text.as_bytes()) {
        Err(DataError::MalformedRow { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("expected 5 fields, found 4"));
        }
        other => panic!("Expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_feature_is_malformed() {
    let text = "5.1,abc,1.4,0.2,Iris-setosa\n";
    let result = CsvDataLoader::new(4).load_from_reader(text.as_bytes());
    assert!(matches!(result, Err(DataError::MalformedRow { line: 1, .. })));
}

#[test]
fn test_empty_label_is_malformed() {
    let text = "5.1,3.5,1.4,0.2,\n";
    let result = CsvDataLoader::new(4).load_from_reader(text.as_bytes());
    assert!(matches!(result, Err(DataError::MalformedRow { .. })));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(IRIS_HEAD.as_bytes()).unwrap();
    file.flush().unwrap();
    let samples = CsvDataLoader::new(4).load(file.path()).unwrap();
    assert_eq!(samples.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CsvDataLoader::new(4).load(dir.path().join("nope.csv"));
    assert!(matches!(result, Err(DataError::Io { .. })));
}
