use crate::data::dataset::BinaryDataset;
use crate::grad::{Evaluation, GradientProvider, Gradients};
use crate::loss::bce::BceLoss;
use crate::model::neuron::Neuron;

/// Closed-form gradient of mean BCE through a sigmoid unit.
///
/// With `p = σ(w·x + b)` the sigmoid slope cancels against the BCE
/// denominator, leaving the residual:
///   ∂L/∂w = mean((p - y) · x)
///   ∂L/∂b = mean(p - y)
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticGradient;

impl GradientProvider for AnalyticGradient {
    fn evaluate(&self, neuron: &Neuron, batch: &BinaryDataset) -> Evaluation {
        let mut weights = vec![0.0; neuron.input_size()];
        let mut bias = 0.0;
        let mut total_loss = 0.0;

        for (x, y) in batch.iter() {
            let p = neuron.predict(x);
            total_loss += BceLoss::loss(p, y);

            let residual = p - y;
            for (g, xi) in weights.iter_mut().zip(x) {
                *g += residual * xi;
            }
            bias += residual;
        }

        if batch.is_empty() {
            return Evaluation { loss: 0.0, gradients: Gradients { weights, bias } };
        }

        let inv_n = 1.0 / batch.len() as f64;
        weights.iter_mut().for_each(|g| *g *= inv_n);

        Evaluation {
            loss: total_loss * inv_n,
            gradients: Gradients { weights, bias: bias * inv_n },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grad::FiniteDifference;

    fn toy_batch() -> BinaryDataset {
        BinaryDataset::new(
            vec![vec![0.2, -1.0, 0.5], vec![1.5, 0.3, -0.2], vec![-0.7, 0.8, 1.1]],
            vec![0.0, 1.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn matches_finite_differences() {
        let neuron = Neuron::from_parameters(vec![0.3, -0.4, 0.1], -0.2);
        let batch = toy_batch();

        let exact = AnalyticGradient.evaluate(&neuron, &batch);
        let approx = FiniteDifference::default().evaluate(&neuron, &batch);

        assert!((exact.loss - approx.loss).abs() < 1e-12);
        for (a, b) in exact.gradients.weights.iter().zip(&approx.gradients.weights) {
            assert!((a - b).abs() < 1e-6, "{} vs {}", a, b);
        }
        assert!((exact.gradients.bias - approx.gradients.bias).abs() < 1e-6);
    }

    #[test]
    fn zero_parameters_give_half_residuals() {
        let batch = BinaryDataset::new(vec![vec![2.0], vec![4.0]], vec![1.0, 0.0]).unwrap();
        let eval = AnalyticGradient.evaluate(&Neuron::zeros(1), &batch);

        // p = 0.5 everywhere: residuals are -0.5 and +0.5.
        assert!((eval.loss - std::f64::consts::LN_2).abs() < 1e-12);
        assert!((eval.gradients.weights[0] - 0.5).abs() < 1e-12);
        assert!(eval.gradients.bias.abs() < 1e-12);
    }

    #[test]
    fn empty_batch_has_zero_gradient() {
        let eval = AnalyticGradient.evaluate(&Neuron::zeros(2), &BinaryDataset::default());
        assert_eq!(eval.loss, 0.0);
        assert_eq!(eval.gradients.weights, vec![0.0, 0.0]);
        assert_eq!(eval.gradients.bias, 0.0);
    }
}
