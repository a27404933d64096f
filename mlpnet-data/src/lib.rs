//! Data boundary for the `mlpnet-core` engine: reading labelled samples from
//! delimited text, shuffling and splitting them, and turning them into the
//! `(features, one-hot labels)` matrices the network trains on.

pub mod csv_loader;
pub mod dataset;
pub mod encoding;
pub mod error;
pub mod iris;
pub mod sample;
pub mod split;

// Re-export main components
pub use csv_loader::CsvDataLoader;
pub use dataset::{Dataset, VecDataset};
pub use encoding::LabelEncoder;
pub use error::DataError;
pub use sample::Sample;
pub use split::{shuffle, train_test_split};
