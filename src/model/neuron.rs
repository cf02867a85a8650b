use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::activation::sigmoid;

/// Predictions are clamped into `[PROB_EPS, 1 - PROB_EPS]`, keeping them
/// strictly inside (0, 1) and keeping `ln` finite in the loss.
pub const PROB_EPS: f64 = 1e-12;

/// Learnable state of a single sigmoid unit: one weight per input feature and
/// a scalar bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Neuron {
    pub fn from_parameters(weights: Vec<f64>, bias: f64) -> Neuron {
        Neuron { weights, bias }
    }

    pub fn zeros(input_size: usize) -> Neuron {
        Neuron { weights: vec![0.0; input_size], bias: 0.0 }
    }

    /// Draws weights and bias from N(0, sqrt(1 / input_size)).
    pub fn random<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Neuron {
        let std_dev = (1.0 / input_size.max(1) as f64).sqrt();
        let weights = (0..input_size)
            .map(|_| sample_standard_normal(rng) * std_dev)
            .collect();
        let bias = sample_standard_normal(rng) * std_dev;
        Neuron { weights, bias }
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Pre-activation score `dot(x, w) + b`.
    ///
    /// # Panics
    /// Panics if `input.len()` differs from the number of weights.
    pub fn score(&self, input: &[f64]) -> f64 {
        assert_eq!(
            input.len(),
            self.weights.len(),
            "input has {} features but the neuron has {} weights",
            input.len(),
            self.weights.len()
        );
        input.iter().zip(&self.weights).map(|(x, w)| x * w).sum::<f64>() + self.bias
    }

    /// Probability of label 1, strictly inside (0, 1).
    ///
    /// A score of NaN (finite products overflowing to `+inf` and `-inf` in the
    /// dot product) is read as 0, giving 0.5.
    pub fn predict(&self, input: &[f64]) -> f64 {
        let z = self.score(input);
        let z = if z.is_nan() { 0.0 } else { z };
        sigmoid(z).clamp(PROB_EPS, 1.0 - PROB_EPS)
    }

    pub fn predict_batch(&self, inputs: &[Vec<f64>]) -> Vec<f64> {
        inputs.iter().map(|x| self.predict(x)).collect()
    }

    /// In-place `param -= lr * grad`.
    ///
    /// # Panics
    /// Panics if `weights_grad` has a different length than the weights.
    pub fn apply_gradients(&mut self, weights_grad: &[f64], bias_grad: f64, lr: f64) {
        assert_eq!(weights_grad.len(), self.weights.len(), "gradient length mismatch");
        for (w, g) in self.weights.iter_mut().zip(weights_grad) {
            *w -= lr * g;
        }
        self.bias -= lr * bias_grad;
    }
}

/// Samples N(0, 1) with the Box-Muller transform.
fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // Uniforms on (0, 1] to avoid ln(0).
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = 1.0 - rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
