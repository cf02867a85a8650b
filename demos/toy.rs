//! Trains a single neuron on four separable 2-D points.
//!
//! Run with:
//!   cargo run --example toy
//!
//! Demos live under `demos/` rather than `examples/`; the `toy` target is
//! declared in `Cargo.toml` and automatic example discovery is off.

use rand::rngs::StdRng;
use rand::SeedableRng;

use single_neuron::{train_loop, AnalyticGradient, BinaryDataset, Neuron, Sgd, TrainConfig};

fn main() {
    let inputs = vec![
        vec![-2.0, -1.0],
        vec![2.0, 1.0],
        vec![-1.0, -2.0],
        vec![1.0, 2.0],
    ];
    let labels = vec![0.0, 1.0, 0.0, 1.0];
    let dataset = BinaryDataset::new(inputs, labels).expect("toy dataset is well-formed");

    let mut neuron = Neuron::random(2, &mut StdRng::seed_from_u64(0));
    let config = TrainConfig::new(50, 0.5);

    train_loop(
        &mut neuron,
        &dataset,
        None,
        &AnalyticGradient,
        &Sgd::new(config.learning_rate),
        &config,
        |stats, _, _| {
            if stats.epoch % 10 == 0 {
                println!("Epoch {}: loss = {:.6}", stats.epoch, stats.train_loss);
            }
        },
    );

    for (x, y) in dataset.iter() {
        println!("Input: {:?} -> Output: {:.4} (label {})", x, neuron.predict(x), y);
    }
}
