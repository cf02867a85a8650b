use serde::{Deserialize, Serialize};

/// Per-epoch statistics handed to the `train_loop` observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean training loss at the parameters the epoch started from.
    pub train_loss: f64,
    /// Mean validation loss after this epoch's update, if a validation set was given.
    pub val_loss: Option<f64>,
    /// Fraction of training examples classified correctly, at the same
    /// parameters as `train_loss`.
    pub train_accuracy: f64,
    /// Validation accuracy after this epoch's update.
    pub val_accuracy: Option<f64>,
    /// Wall-clock duration of this epoch in milliseconds.
    pub elapsed_ms: u64,
}
