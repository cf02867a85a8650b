use crate::data::images::ImageShape;
use crate::error::{NeuronError, Result};

/// Feature vectors paired with binary targets (each 0.0 or 1.0).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BinaryDataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl BinaryDataset {
    /// Validates equal lengths, a uniform feature length and binary labels.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<BinaryDataset> {
        if features.len() != labels.len() {
            return Err(NeuronError::InvalidArgument(format!(
                "{} feature vectors but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if let Some(first) = features.first() {
            let n = first.len();
            if let Some(i) = features.iter().position(|f| f.len() != n) {
                return Err(NeuronError::InvalidArgument(format!(
                    "example {} has {} features, expected {}",
                    i,
                    features[i].len(),
                    n
                )));
            }
        }
        if let Some(i) = labels.iter().position(|&y| y != 0.0 && y != 1.0) {
            return Err(NeuronError::InvalidArgument(format!(
                "label {} at index {} is not 0 or 1",
                labels[i], i
            )));
        }
        Ok(BinaryDataset { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature length shared by every example; 0 for an empty set.
    pub fn feature_len(&self) -> usize {
        self.features.first().map(|f| f.len()).unwrap_or(0)
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn example(&self, index: usize) -> (&[f64], f64) {
        (&self.features[index], self.labels[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> + '_ {
        self.features
            .iter()
            .map(|f| f.as_slice())
            .zip(self.labels.iter().copied())
    }
}

/// Two-class training and validation data produced by
/// [`select_classes`](crate::data::filter::select_classes).
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    pub train: BinaryDataset,
    pub validation: BinaryDataset,
    /// Class names in label order: `class_names[0]` is label 0.
    pub class_names: [String; 2],
    pub shape: ImageShape,
    /// Divisor applied to raw pixels of both splits.
    pub scale: f64,
}

impl DatasetSplit {
    pub fn class_name(&self, label: u8) -> &str {
        &self.class_names[usize::from(label != 0)]
    }
}
