use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::dataset::DatasetSplit;
use crate::data::images::ImageShape;
use crate::error::Result;
use crate::infer::accuracy;
use crate::model::neuron::Neuron;
use crate::train::history::LossHistory;
use crate::train::train_config::TrainConfig;

/// Summary of a finished run, written as a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Class names in label order.
    pub class_names: Vec<String>,
    /// Shape the weight vector reshapes to.
    pub image_shape: ImageShape,
    pub train_examples: usize,
    pub validation_examples: usize,
    pub config: TrainConfig,
    pub final_train_loss: Option<f64>,
    pub final_validation_loss: Option<f64>,
    pub train_accuracy: f64,
    pub validation_accuracy: f64,
    pub history: LossHistory,
    pub neuron: Neuron,
}

impl TrainingReport {
    pub fn new(split: &DatasetSplit, config: &TrainConfig, history: LossHistory, neuron: &Neuron) -> Self {
        TrainingReport {
            class_names: split.class_names.to_vec(),
            image_shape: split.shape,
            train_examples: split.train.len(),
            validation_examples: split.validation.len(),
            config: config.clone(),
            final_train_loss: history.last_train(),
            final_validation_loss: history.last_validation(),
            train_accuracy: accuracy(neuron, &split.train),
            validation_accuracy: accuracy(neuron, &split.validation),
            history,
            neuron: neuron.clone(),
        }
    }

    /// Serializes the report to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
