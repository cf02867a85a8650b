//! Gradient providers: anything that can report the batch loss and its
//! partial derivatives with respect to a neuron's weights and bias.

pub mod analytic;
pub mod finite_difference;

use serde::{Deserialize, Serialize};

use crate::data::dataset::BinaryDataset;
use crate::model::neuron::Neuron;

pub use analytic::AnalyticGradient;
pub use finite_difference::FiniteDifference;

/// ∂loss/∂w and ∂loss/∂b at a particular parameter value.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Batch loss and gradients, both evaluated at the same parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub loss: f64,
    pub gradients: Gradients,
}

pub trait GradientProvider {
    /// Mean BCE over `batch` and its gradient at `neuron`'s current parameters.
    fn evaluate(&self, neuron: &Neuron, batch: &BinaryDataset) -> Evaluation;
}

/// Selects a provider from configuration.
///
/// - `Analytic`         — closed-form gradient; use for real training.
/// - `FiniteDifference` — central differences; O(features) loss evaluations
///   per step, only practical on small inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    #[default]
    Analytic,
    FiniteDifference,
}

impl GradientProvider for GradientKind {
    fn evaluate(&self, neuron: &Neuron, batch: &BinaryDataset) -> Evaluation {
        match self {
            GradientKind::Analytic => AnalyticGradient.evaluate(neuron, batch),
            GradientKind::FiniteDifference => FiniteDifference::default().evaluate(neuron, batch),
        }
    }
}
