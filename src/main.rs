//! Trains a single sigmoid neuron on two CIFAR-10 classes.
//!
//! Run with:
//!   cargo run --release -- [run_config.json]
//!
//! Without an argument the defaults from `RunConfig::default()` are used,
//! expecting the binary batches under `./cifar-10-batches-bin/`.
//! Set `RUST_LOG=info` for progress output.

use std::error::Error;
use std::path::Path;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use single_neuron::data::cifar;
use single_neuron::viz::{save_loss_curve_png, save_weights_png};
use single_neuron::{
    sample_predictions, select_classes, train_loop, DatasetSplit, LossHistory, Neuron, RunConfig,
    Sgd, TrainingReport,
};

const CURVE_WIDTH: u32 = 640;
const CURVE_HEIGHT: u32 = 360;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load_json(Path::new(&path))?,
        None => {
            info!("no config file given; using defaults");
            RunConfig::default()
        }
    };
    config.train.validate()?;

    // --- Data ---
    let train_images = cifar::load_batches(&config.data_dir, &config.train_batches)?;
    let validation_images = cifar::load_batches(&config.data_dir, &config.validation_batches)?;
    let split = select_classes(&train_images, &validation_images, &config.classes)?;
    drop(train_images);
    drop(validation_images);

    println!(
        "{} (label 0) vs {} (label 1): {} training, {} validation examples",
        split.class_names[0],
        split.class_names[1],
        split.train.len(),
        split.validation.len()
    );

    std::fs::create_dir_all(&config.output_dir)?;

    // --- Model ---
    let mut rng = StdRng::seed_from_u64(config.train.seed);
    let mut neuron = Neuron::random(split.train.feature_len(), &mut rng);
    let optimizer = Sgd::new(config.train.learning_rate);

    // --- Training ---
    let history = train_loop(
        &mut neuron,
        &split.train,
        Some(&split.validation),
        &config.train.gradient,
        &optimizer,
        &config.train,
        |stats, current, history| {
            if config.snapshot_every > 0 && stats.epoch % config.snapshot_every == 0 {
                if let Err(e) = write_snapshots(&config, &split, current, history, Some(stats.epoch)) {
                    warn!("could not write epoch {} snapshot: {}", stats.epoch, e);
                }
            }
        },
    );

    write_snapshots(&config, &split, &neuron, &history, None)?;

    let report = TrainingReport::new(&split, &config.train, history, &neuron);
    let report_path = config.output_dir.join("report.json");
    report.save_json(&report_path)?;
    info!("report written to {}", report_path.display());

    println!(
        "Train acc: {:.2}%  Validation acc: {:.2}%",
        report.train_accuracy * 100.0,
        report.validation_accuracy * 100.0
    );

    // --- Sample predictions ---
    println!("\nSample validation predictions:");
    println!("{:>8}  {:>12}  {:>12}  {:>8}", "Index", "True Label", "Predicted", "P(1)");
    println!("{}", "-".repeat(46));
    for p in sample_predictions(&neuron, &split.validation, config.sample_count, &mut rng) {
        println!(
            "{:>8}  {:>12}  {:>12}  {:>8.4}",
            p.index,
            split.class_name(p.actual),
            split.class_name(p.predicted),
            p.probability
        );
    }

    Ok(())
}

/// Writes the weight image and loss curve; `epoch` tags intermediate snapshots.
fn write_snapshots(
    config: &RunConfig,
    split: &DatasetSplit,
    neuron: &Neuron,
    history: &LossHistory,
    epoch: Option<usize>,
) -> single_neuron::Result<()> {
    let suffix = epoch.map(|e| format!("_epoch{:05}", e)).unwrap_or_default();
    let weights_path = config.output_dir.join(format!("weights{}.png", suffix));
    let curve_path = config.output_dir.join(format!("loss_curve{}.png", suffix));

    save_weights_png(neuron, split.shape, config.weight_image_scale, &weights_path)?;
    save_loss_curve_png(history, CURVE_WIDTH, CURVE_HEIGHT, &curve_path)?;
    info!("wrote {} and {}", weights_path.display(), curve_path.display());
    Ok(())
}
