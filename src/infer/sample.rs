use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::dataset::BinaryDataset;
use crate::model::neuron::Neuron;

/// Probabilities at or above this are predicted as label 1.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// One model prediction next to the ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Position of the example in the dataset it was drawn from.
    pub index: usize,
    /// Model probability of label 1.
    pub probability: f64,
    pub predicted: u8,
    pub actual: u8,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

fn to_label(probability: f64) -> u8 {
    u8::from(probability >= DECISION_THRESHOLD)
}

/// Runs the neuron on example `index` of `dataset`.
pub fn predict_example(neuron: &Neuron, dataset: &BinaryDataset, index: usize) -> Prediction {
    let (x, y) = dataset.example(index);
    let probability = neuron.predict(x);
    Prediction {
        index,
        probability,
        predicted: to_label(probability),
        actual: to_label(y),
    }
}

/// Draws `n` examples uniformly at random (with replacement) and predicts each.
/// Returns an empty list for an empty dataset.
pub fn sample_predictions<R: Rng + ?Sized>(
    neuron: &Neuron,
    dataset: &BinaryDataset,
    n: usize,
    rng: &mut R,
) -> Vec<Prediction> {
    if dataset.is_empty() {
        return Vec::new();
    }
    (0..n)
        .map(|_| predict_example(neuron, dataset, rng.gen_range(0..dataset.len())))
        .collect()
}

/// Fraction of `dataset` classified correctly; 0.0 for an empty dataset.
pub fn accuracy(neuron: &Neuron, dataset: &BinaryDataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    let correct = dataset
        .iter()
        .filter(|&(x, y)| to_label(neuron.predict(x)) == to_label(y))
        .count();
    correct as f64 / dataset.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset() -> BinaryDataset {
        BinaryDataset::new(
            vec![vec![-2.0], vec![-1.0], vec![1.0], vec![2.0]],
            vec![0.0, 1.0, 1.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn sampling_returns_requested_count_of_valid_predictions() {
        let neuron = Neuron::from_parameters(vec![3.0], 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        let preds = sample_predictions(&neuron, &dataset(), 25, &mut rng);
        assert_eq!(preds.len(), 25);
        for p in &preds {
            assert!(p.index < 4);
            assert!(p.probability > 0.0 && p.probability < 1.0);
            assert_eq!(p, &predict_example(&neuron, &dataset(), p.index));
        }
    }

    #[test]
    fn sampling_an_empty_dataset_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let preds = sample_predictions(&Neuron::zeros(1), &BinaryDataset::default(), 5, &mut rng);
        assert!(preds.is_empty());
    }

    #[test]
    fn accuracy_counts_threshold_matches() {
        let neuron = Neuron::from_parameters(vec![3.0], 0.0);
        // Only the example at -1.0 (label 1) is misclassified.
        assert_eq!(accuracy(&neuron, &dataset()), 0.75);
        let p = predict_example(&neuron, &dataset(), 1);
        assert_eq!((p.predicted, p.actual), (0, 1));
        assert!(!p.is_correct());
    }
}
