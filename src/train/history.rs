use serde::{Deserialize, Serialize};

use crate::train::epoch_stats::EpochStats;

/// Append-only per-epoch loss record, used for plotting and reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LossHistory {
    pub train: Vec<f64>,
    /// Empty when training ran without a validation set.
    pub validation: Vec<f64>,
}

impl LossHistory {
    pub fn with_capacity(epochs: usize) -> Self {
        LossHistory {
            train: Vec::with_capacity(epochs),
            validation: Vec::with_capacity(epochs),
        }
    }

    pub fn record(&mut self, stats: &EpochStats) {
        self.train.push(stats.train_loss);
        if let Some(v) = stats.val_loss {
            self.validation.push(v);
        }
    }

    pub fn epochs(&self) -> usize {
        self.train.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty()
    }

    pub fn last_train(&self) -> Option<f64> {
        self.train.last().copied()
    }

    pub fn last_validation(&self) -> Option<f64> {
        self.validation.last().copied()
    }

    /// Largest finite value across both series.
    pub fn max_loss(&self) -> Option<f64> {
        self.train
            .iter()
            .chain(&self.validation)
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(epoch: usize, train_loss: f64, val_loss: Option<f64>) -> EpochStats {
        EpochStats {
            epoch,
            total_epochs: 3,
            train_loss,
            val_loss,
            train_accuracy: 0.5,
            val_accuracy: None,
            elapsed_ms: 0,
        }
    }

    #[test]
    fn record_appends_in_order() {
        let mut h = LossHistory::default();
        h.record(&stats(1, 0.7, Some(0.8)));
        h.record(&stats(2, 0.6, None));
        assert_eq!(h.train, vec![0.7, 0.6]);
        assert_eq!(h.validation, vec![0.8]);
        assert_eq!(h.epochs(), 2);
        assert_eq!(h.last_train(), Some(0.6));
        assert_eq!(h.last_validation(), Some(0.8));
    }

    #[test]
    fn max_loss_skips_non_finite() {
        let h = LossHistory { train: vec![0.4, f64::INFINITY], validation: vec![0.9] };
        assert_eq!(h.max_loss(), Some(0.9));
        assert_eq!(LossHistory::default().max_loss(), None);
    }
}
