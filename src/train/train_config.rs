use serde::{Deserialize, Serialize};

use crate::error::{NeuronError, Result};
use crate::grad::GradientKind;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — number of full-batch updates; there is no early stopping
/// - `learning_rate` — fixed gradient-descent step size
/// - `seed`          — seeds parameter initialisation and prediction sampling
/// - `log_every`     — emit an `info!` progress line every N epochs (0 = only the last)
/// - `gradient`      — which gradient provider the binary wires in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: u64,
    pub log_every: usize,
    pub gradient: GradientKind,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 1000,
            learning_rate: 0.1,
            seed: 42,
            log_every: 100,
            gradient: GradientKind::Analytic,
        }
    }
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate, ..TrainConfig::default() }
    }

    /// Rejects non-finite or non-positive learning rates.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NeuronError::InvalidArgument(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: TrainConfig = serde_json::from_str(r#"{ "epochs": 50, "gradient": "finite_difference" }"#).unwrap();
        assert_eq!(cfg.epochs, 50);
        assert_eq!(cfg.learning_rate, 0.1);
        assert_eq!(cfg.gradient, GradientKind::FiniteDifference);
    }

    #[test]
    fn learning_rate_must_be_positive() {
        assert!(TrainConfig::new(10, 0.5).validate().is_ok());
        assert!(TrainConfig::new(10, 0.0).validate().is_err());
        assert!(TrainConfig::new(10, f64::NAN).validate().is_err());
    }
}
