use crate::data::dataset::BinaryDataset;
use crate::grad::{Evaluation, GradientProvider, Gradients};
use crate::loss::bce::BceLoss;
use crate::model::neuron::Neuron;

/// Central-difference gradient: `(L(θ + h) - L(θ - h)) / 2h` per parameter.
///
/// Needs `2 · (features + 1)` passes over the batch per call.
#[derive(Debug, Clone, Copy)]
pub struct FiniteDifference {
    pub step: f64,
}

impl Default for FiniteDifference {
    fn default() -> Self {
        FiniteDifference { step: 1e-5 }
    }
}

impl FiniteDifference {
    pub fn new(step: f64) -> FiniteDifference {
        FiniteDifference { step }
    }
}

fn mean_loss(neuron: &Neuron, batch: &BinaryDataset) -> f64 {
    BceLoss::batch_loss(&neuron.predict_batch(batch.features()), batch.labels())
}

impl GradientProvider for FiniteDifference {
    fn evaluate(&self, neuron: &Neuron, batch: &BinaryDataset) -> Evaluation {
        let h = self.step;
        let mut probe = neuron.clone();

        let mut weights = Vec::with_capacity(neuron.input_size());
        for i in 0..neuron.input_size() {
            let original = probe.weights[i];
            probe.weights[i] = original + h;
            let plus = mean_loss(&probe, batch);
            probe.weights[i] = original - h;
            let minus = mean_loss(&probe, batch);
            probe.weights[i] = original;
            weights.push((plus - minus) / (2.0 * h));
        }

        probe.bias = neuron.bias + h;
        let plus = mean_loss(&probe, batch);
        probe.bias = neuron.bias - h;
        let minus = mean_loss(&probe, batch);
        let bias = (plus - minus) / (2.0 * h);

        Evaluation {
            loss: mean_loss(neuron, batch),
            gradients: Gradients { weights, bias },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_points_uphill() {
        // Single positive example with a negative score: increasing w or b lowers the loss.
        let batch = BinaryDataset::new(vec![vec![1.0]], vec![1.0]).unwrap();
        let neuron = Neuron::from_parameters(vec![-1.0], -1.0);
        let eval = FiniteDifference::new(1e-6).evaluate(&neuron, &batch);
        assert!(eval.gradients.weights[0] < 0.0);
        assert!(eval.gradients.bias < 0.0);
    }

    #[test]
    fn gradient_kind_dispatches() {
        use crate::grad::GradientKind;

        let batch = BinaryDataset::new(vec![vec![1.0, 2.0]], vec![0.0]).unwrap();
        let neuron = Neuron::from_parameters(vec![0.1, 0.2], 0.0);
        let a = GradientKind::Analytic.evaluate(&neuron, &batch);
        let f = GradientKind::FiniteDifference.evaluate(&neuron, &batch);
        assert!((a.gradients.weights[1] - f.gradients.weights[1]).abs() < 1e-6);
    }
}
