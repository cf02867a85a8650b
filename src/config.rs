use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::cifar::{TEST_BATCH, TRAIN_BATCHES};
use crate::error::Result;
use crate::train::train_config::TrainConfig;

/// Everything the `single-neuron` binary needs for one run.
///
/// All fields are optional in JSON; missing ones take the `Default` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directory holding the CIFAR-10 `*.bin` batch files.
    pub data_dir: PathBuf,
    pub train_batches: Vec<String>,
    pub validation_batches: Vec<String>,
    /// The two classes to separate.
    pub classes: Vec<String>,
    /// Where weight snapshots, the loss curve and `report.json` are written.
    pub output_dir: PathBuf,
    /// Write weight / loss-curve snapshots every N epochs (0 = only at the end).
    pub snapshot_every: usize,
    /// Upscaling factor of the weight image.
    pub weight_image_scale: u32,
    /// Number of random validation predictions printed after training.
    pub sample_count: usize,
    pub train: TrainConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_dir: PathBuf::from("cifar-10-batches-bin"),
            train_batches: TRAIN_BATCHES.iter().map(|s| s.to_string()).collect(),
            validation_batches: vec![TEST_BATCH.to_owned()],
            classes: vec!["airplane".to_owned(), "automobile".to_owned()],
            output_dir: PathBuf::from("output"),
            snapshot_every: 100,
            weight_image_scale: 8,
            sample_count: 10,
            train: TrainConfig::default(),
        }
    }
}

impl RunConfig {
    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: &Path) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
