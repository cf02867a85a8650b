use crate::model::neuron::PROB_EPS;

/// Binary cross-entropy for a sigmoid output.
pub struct BceLoss;

impl BceLoss {
    /// Per-example BCE: -(y·ln p + (1-y)·ln(1-p)), with p clamped away from 0 and 1.
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        let p = predicted.clamp(PROB_EPS, 1.0 - PROB_EPS);
        -(expected * p.ln() + (1.0 - expected) * (1.0 - p).ln())
    }

    /// Arithmetic mean of the per-example loss; 0 for an empty batch.
    pub fn batch_loss(predicted: &[f64], expected: &[f64]) -> f64 {
        assert_eq!(predicted.len(), expected.len(), "prediction/target length mismatch");
        if predicted.is_empty() {
            return 0.0;
        }
        let n = predicted.len() as f64;
        predicted.iter().zip(expected)
            .map(|(&p, &y)| BceLoss::loss(p, y))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_over_open_interval() {
        for &p in &[1e-9, 0.01, 0.3, 0.5, 0.7, 0.99, 1.0 - 1e-9] {
            for &y in &[0.0, 1.0] {
                assert!(BceLoss::loss(p, y) >= 0.0);
            }
        }
    }

    #[test]
    fn confident_correct_prediction_costs_almost_nothing() {
        assert!(BceLoss::loss(1.0 - 1e-10, 1.0) < 1e-9);
        assert!(BceLoss::loss(1e-10, 0.0) < 1e-9);
    }

    #[test]
    fn confident_wrong_prediction_grows() {
        let mut previous = 0.0;
        for &p in &[0.5, 1e-1, 1e-3, 1e-6, 1e-9] {
            let l = BceLoss::loss(p, 1.0);
            assert!(l > previous);
            previous = l;
        }
        assert!(previous > 20.0);
    }

    #[test]
    fn exact_zero_and_one_are_clamped() {
        assert!(BceLoss::loss(0.0, 1.0).is_finite());
        assert!(BceLoss::loss(1.0, 0.0).is_finite());
    }

    #[test]
    fn batch_loss_is_the_mean() {
        let p = [0.9, 0.2];
        let y = [1.0, 0.0];
        let expected = (-(0.9f64).ln() - (0.8f64).ln()) / 2.0;
        assert!((BceLoss::batch_loss(&p, &y) - expected).abs() < 1e-12);
        assert_eq!(BceLoss::batch_loss(&[], &[]), 0.0);
    }
}
