//! Iris classification with a multilayer perceptron.
//!
//! Usage:
//!   cargo run -p mlpnet-data --example iris_classify -- --file data/iris.csv -k 500 -r 0.1
//!   cargo run -p mlpnet-data --example iris_classify -- --synthetic --seed 7

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use mlpnet_core::nn::metrics::accuracy;
use mlpnet_core::{ActivationKind, Matrix, MlpError, MultiLayerPerceptron, TrainOptions};
use mlpnet_data::{iris, shuffle, train_test_split, Dataset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iris_classify", version)]
#[command(about = "Train a multilayer perceptron on the Iris dataset")]
struct Args {
    /// Path to the iris data file
    #[arg(short, long, default_value = "data/iris.csv")]
    file: PathBuf,

    /// Maximum number of training iterations [default: 100]
    #[arg(short = 'k', long)]
    iterations: Option<usize>,

    /// Learning rate [default: 0.1]
    #[arg(short, long)]
    rate: Option<f64>,

    /// Training options as JSON; -k and -r take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hidden layer size (repeat for more layers)
    #[arg(long = "hidden", value_name = "SIZE", default_values_t = [5usize])]
    hidden: Vec<usize>,

    /// Activation of every layer: sigmoid, tanh or tanhopt
    #[arg(long, default_value = "sigmoid")]
    activation: ActivationKind,

    /// Keep the file order instead of shuffling before the split
    #[arg(long)]
    no_shuffle: bool,

    /// Share of samples used for training
    #[arg(long, default_value_t = 0.6)]
    train_fraction: f64,

    /// Seed for shuffling and weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Generate Iris-like samples instead of reading a file
    #[arg(long)]
    synthetic: bool,

    /// Samples per class with --synthetic
    #[arg(long, default_value_t = 50)]
    per_class: usize,

    /// Graphviz topology output
    #[arg(long, default_value = "nn_mlp4iris.dot")]
    dot: PathBuf,

    /// JSON topology output
    #[arg(long, default_value = "nn_mlp4iris.json")]
    json: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let options = training_options(&args)?;

    println!("Iris classification task using NN model");
    println!();

    let mut samples = if args.synthetic {
        println!("generating {} synthetic samples per class ...", args.per_class);
        iris::synthetic(args.per_class, &mut rng)
    } else {
        println!("loading iris data from {} ...", args.file.display());
        iris::loader().load(&args.file).with_context(|| {
            format!(
                "loading iris data from {} failed (use --synthetic to run without it)",
                args.file.display()
            )
        })?
    };
    if samples.is_empty() {
        anyhow::bail!("no samples to train on");
    }
    if !args.no_shuffle {
        shuffle(&mut samples, &mut rng);
    }

    let (train, test) = train_test_split(samples, args.train_fraction)?;
    println!("{} training / {} test samples", train.len(), test.len());
    let encoder = iris::encoder();
    let (x_train, y_train) = encoder.encode(&train)?;
    let (x_test, y_test) = encoder.encode(&test)?;

    let mut net = MultiLayerPerceptron::new("mlp", iris::FEATURES, encoder.num_classes());
    println!("building MultiLayerPerceptron model ...");
    net.build_with_rng(&args.hidden, args.activation, &mut rng)?;

    println!(
        "training MultiLayerPerceptron model with options: [maxIter={}, learning rate={}]",
        options.max_iterations, options.learning_rate
    );
    net.train(&x_train, &y_train, &options)?;

    println!("testing MultiLayerPerceptron model ...");
    println!("performance on train set");
    evaluate(&mut net, &x_train, &y_train)?;
    println!("performance on test set");
    if test.is_empty() {
        println!("(no test samples)");
    } else {
        evaluate(&mut net, &x_test, &y_test)?;
    }

    for path in [&args.dot, &args.json] {
        println!("saving model to {} ...", path.display());
        match net.save(path) {
            Ok(()) => {}
            Err(MlpError::UnsupportedExportFormat(ext)) => {
                warn!("not saving {}: unsupported extension {:?}", path.display(), ext)
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn training_options(args: &Args) -> Result<TrainOptions> {
    let mut options = match &args.config {
        Some(path) => TrainOptions::from_json_file(path)
            .with_context(|| format!("reading training options from {}", path.display()))?,
        None => TrainOptions::default(),
    };
    if let Some(k) = args.iterations {
        options = options.with_max_iterations(k);
    }
    if let Some(r) = args.rate {
        options = options.with_learning_rate(r);
    }
    options.validate()?;
    Ok(options)
}

fn evaluate(net: &mut MultiLayerPerceptron, x: &Matrix, y: &Matrix) -> Result<()> {
    let scores = net.feed_forward(x)?;
    let join = |indices: Vec<usize>| {
        indices
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("truth: ");
    println!("{}", join(y.argmax_columns()));
    println!("decision: ");
    println!("{}", join(scores.argmax_columns()));
    println!("accuracy: {:.3}%", accuracy(&scores, y)? * 100.0);
    Ok(())
}
