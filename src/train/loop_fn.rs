use std::time::Instant;

use log::{debug, info};

use crate::data::dataset::{BinaryDataset, DatasetSplit};
use crate::grad::GradientProvider;
use crate::infer::accuracy;
use crate::loss::bce::BceLoss;
use crate::model::neuron::Neuron;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::history::LossHistory;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `neuron` for exactly `config.epochs` full-batch epochs and returns
/// the recorded loss history.
///
/// Each epoch:
/// 1. asks `provider` for the training loss and gradients at the current
///    parameters, and measures training accuracy at those same parameters;
/// 2. applies one `optimizer` step;
/// 3. records that (pre-update) training loss;
/// 4. evaluates validation loss and accuracy at the updated parameters, without updating;
/// 5. hands an `EpochStats` and the current state to `on_epoch`.
///
/// # Panics
/// Panics if `train` is empty or its feature length differs from the neuron's.
pub fn train_loop<G, F>(
    neuron: &mut Neuron,
    train: &BinaryDataset,
    validation: Option<&BinaryDataset>,
    provider: &G,
    optimizer: &Sgd,
    config: &TrainConfig,
    mut on_epoch: F,
) -> LossHistory
where
    G: GradientProvider + ?Sized,
    F: FnMut(&EpochStats, &Neuron, &LossHistory),
{
    assert!(!train.is_empty(), "training set must not be empty");
    assert_eq!(
        train.feature_len(),
        neuron.input_size(),
        "training features do not match the neuron's input size"
    );

    let validation = validation.filter(|v| !v.is_empty());
    let mut history = LossHistory::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let evaluation = provider.evaluate(neuron, train);
        let train_accuracy = accuracy(neuron, train);
        optimizer.step(neuron, &evaluation.gradients);

        let val_loss = validation.map(|v| eval_loss(neuron, v));
        let val_accuracy = validation.map(|v| accuracy(neuron, v));

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss: evaluation.loss,
            val_loss,
            train_accuracy,
            val_accuracy,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        history.record(&stats);

        debug!(
            "epoch {}: train loss {:.6}, val loss {:?}, {} ms",
            epoch, stats.train_loss, stats.val_loss, stats.elapsed_ms
        );
        if should_log(epoch, config) {
            info!(
                "Epoch {}/{}: train loss = {:.6}, train acc = {:.2}%{}",
                epoch,
                config.epochs,
                stats.train_loss,
                stats.train_accuracy * 100.0,
                match (stats.val_loss, stats.val_accuracy) {
                    (Some(l), Some(a)) => format!(", val loss = {:.6}, val acc = {:.2}%", l, a * 100.0),
                    _ => String::new(),
                }
            );
        }

        on_epoch(&stats, neuron, &history);
    }

    history
}

/// Trains on `split` with the provider and learning rate named in `config`,
/// without an observer.
pub fn train(neuron: &mut Neuron, split: &DatasetSplit, config: &TrainConfig) -> LossHistory {
    let optimizer = Sgd::new(config.learning_rate);
    train_loop(
        neuron,
        &split.train,
        Some(&split.validation),
        &config.gradient,
        &optimizer,
        config,
        |_, _, _| {},
    )
}

/// Mean BCE over `dataset` at the current parameters (no update).
pub fn eval_loss(neuron: &Neuron, dataset: &BinaryDataset) -> f64 {
    BceLoss::batch_loss(&neuron.predict_batch(dataset.features()), dataset.labels())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn should_log(epoch: usize, config: &TrainConfig) -> bool {
    epoch == config.epochs || (config.log_every > 0 && epoch % config.log_every == 0)
}
